use crate::BEATS_PER_BAR;

/// Discrete musical position derived from continuous transport time.
///
/// Consumers receive immutable snapshots; only the clock computes these.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BeatPhase {
    /// Cumulative bar index since the session started
    pub current_bar: u64,
    /// Bar index within the audio loop (`current_bar % bars_per_loop`)
    pub bar_in_loop: u32,
    /// Beat within the bar, 0..4
    pub beat_index: u8,
    /// Duration of one bar at the sampled tempo
    pub seconds_per_bar: f64,
}

impl BeatPhase {
    /// The stopped/idle phase.
    pub const ZERO: BeatPhase = BeatPhase {
        current_bar: 0,
        bar_in_loop: 0,
        beat_index: 0,
        seconds_per_bar: 0.0,
    };
}

/// Derive the discrete phase for a point in transport time.
///
/// Pure function of its inputs so the emit-on-change debounce can be
/// tested by comparing the `absolute_beat` of two consecutive samples,
/// without a scheduler in the loop. Returns `(absolute_beat, phase)`.
///
/// `bpm` and `bars_per_loop` must be positive; negative elapsed time
/// clamps to zero.
pub fn phase_at(elapsed_seconds: f64, bpm: f64, bars_per_loop: u32) -> (u64, BeatPhase) {
    debug_assert!(bpm > 0.0);
    debug_assert!(bars_per_loop > 0);

    let seconds_per_beat = 60.0 / bpm;
    let seconds_per_bar = seconds_per_beat * f64::from(BEATS_PER_BAR);

    let t = elapsed_seconds.max(0.0);
    let absolute_beat = (t / seconds_per_beat) as u64;
    let current_bar = (t / seconds_per_bar) as u64;

    let phase = BeatPhase {
        current_bar,
        bar_in_loop: (current_bar % u64::from(bars_per_loop.max(1))) as u32,
        beat_index: (absolute_beat % u64::from(BEATS_PER_BAR)) as u8,
        seconds_per_bar,
    };
    (absolute_beat, phase)
}
