/// Debounce window before quiet input counts as silence.
pub const DEFAULT_SILENCE_THRESHOLD_MS: u64 = 800;

/// Edge-detecting silence debouncer.
///
/// Feed it a raw loud/quiet sample every frame; it reports `Some(true)`
/// once when the input has been quiet for the threshold, `Some(false)`
/// once when sound returns, and `None` otherwise. Drills receive edges
/// only — the grace period lives here, not in the drill state machines.
#[derive(Debug, Clone)]
pub struct SilenceGate {
    threshold: f64,
    /// `None` until the first observation anchors the grace period, so
    /// a gate first observed deep into a session doesn't fire instantly
    last_audible: Option<f64>,
    silent: bool,
}

impl SilenceGate {
    pub fn new() -> Self {
        Self::with_threshold_ms(DEFAULT_SILENCE_THRESHOLD_MS)
    }

    pub fn with_threshold_ms(ms: u64) -> Self {
        Self {
            threshold: ms as f64 / 1000.0,
            last_audible: None,
            silent: false,
        }
    }

    /// Observe one volume sample at time `now` (seconds). Returns the
    /// silence transition, if any.
    pub fn observe(&mut self, loud: bool, now: f64) -> Option<bool> {
        if loud {
            self.last_audible = Some(now);
            if self.silent {
                self.silent = false;
                return Some(false);
            }
            return None;
        }

        let anchor = *self.last_audible.get_or_insert(now);
        if !self.silent && now - anchor >= self.threshold {
            self.silent = true;
            return Some(true);
        }
        None
    }

    pub fn is_silent(&self) -> bool {
        self.silent
    }

    /// Restart the grace period, e.g. when a drill (re)starts.
    pub fn reset(&mut self, now: f64) {
        self.last_audible = Some(now);
        self.silent = false;
    }
}

impl Default for SilenceGate {
    fn default() -> Self {
        Self::new()
    }
}
