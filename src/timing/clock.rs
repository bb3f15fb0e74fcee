use crate::host::TransportClock;

use super::phase::{phase_at, BeatPhase};

/// Output-buffering latency compensation, subtracted from transport time
/// so the perceived beat boundary lands on the audible beat. Empirical
/// tuning value; override with [`BeatClock::with_latency_offset`].
pub const DEFAULT_LATENCY_OFFSET: f64 = 0.050;

/// Debounced beat-phase sampler.
///
/// Sample as often as you like (typically once per frame); a new
/// [`BeatPhase`] comes back only when the absolute beat index actually
/// changed. That caps downstream work at `4 * bpm / 60` updates per
/// second regardless of polling rate.
#[derive(Debug, Clone)]
pub struct BeatClock {
    bars_per_loop: u32,
    latency_offset: f64,
    /// Absolute beat of the last emitted snapshot; `None` before the
    /// first emission and after a reset.
    last_beat: Option<u64>,
}

impl BeatClock {
    pub fn new(bars_per_loop: u32) -> Self {
        Self {
            bars_per_loop: bars_per_loop.max(1),
            latency_offset: DEFAULT_LATENCY_OFFSET,
            last_beat: None,
        }
    }

    /// Override the latency compensation (seconds, clamped at 0).
    pub fn with_latency_offset(mut self, seconds: f64) -> Self {
        self.latency_offset = seconds.max(0.0);
        self
    }

    /// Feed one time sample. Returns a snapshot only when the beat index
    /// changed since the last emission.
    pub fn sample(&mut self, elapsed_seconds: f64, bpm: f64) -> Option<BeatPhase> {
        let t = (elapsed_seconds - self.latency_offset).max(0.0);
        let (beat, phase) = phase_at(t, bpm, self.bars_per_loop);

        if self.last_beat == Some(beat) {
            return None;
        }
        self.last_beat = Some(beat);
        Some(phase)
    }

    /// Poll a transport collaborator. While the transport runs this is
    /// [`Self::sample`]; on the stop edge it emits [`BeatPhase::ZERO`]
    /// exactly once and forgets the previous position.
    pub fn poll(&mut self, transport: &impl TransportClock) -> Option<BeatPhase> {
        if !transport.is_running() {
            if self.last_beat.is_some() {
                self.reset();
                return Some(BeatPhase::ZERO);
            }
            return None;
        }
        self.sample(transport.elapsed_seconds(), transport.bpm())
    }

    /// Forget the last emitted position; the next sample emits again.
    pub fn reset(&mut self) {
        self.last_beat = None;
    }
}
