/// No-pause survival drill: rap continuously, any reported silence ends
/// the run.
///
/// The machine reacts to silence *edges* from the host's debouncer
/// ([`crate::host::SilenceGate`] or equivalent); there is no grace
/// period here. If silence detection is unavailable the drill simply
/// never fails from silence.
#[derive(Debug, Clone)]
pub struct NoPauseDrill {
    state: NoPauseState,
    started_at: f64,
    survived: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoPauseState {
    Idle,
    Running,
    /// Terminal until a retry
    Failed,
}

impl NoPauseDrill {
    pub fn new() -> Self {
        Self {
            state: NoPauseState::Idle,
            started_at: 0.0,
            survived: 0.0,
        }
    }

    pub fn state(&self) -> NoPauseState {
        self.state
    }

    /// Begin a run at time `now`, wiping any previous score.
    pub fn start(&mut self, now: f64) {
        self.state = NoPauseState::Running;
        self.started_at = now;
        self.survived = 0.0;
    }

    /// Retry after a failure. Identical to [`Self::start`].
    pub fn retry(&mut self, now: f64) {
        self.start(now);
    }

    /// Silence edge from the detector. `true` while running fails the
    /// drill immediately; everything else is ignored.
    pub fn on_silence(&mut self, silent: bool, now: f64) {
        if silent && self.state == NoPauseState::Running {
            self.fail(now);
        }
    }

    /// Manual stop counts as a failure with the time banked.
    pub fn fail(&mut self, now: f64) {
        if self.state == NoPauseState::Running {
            self.survived = (now - self.started_at).max(0.0);
            self.state = NoPauseState::Failed;
        }
    }

    /// Survival time in seconds: live while running, frozen once failed.
    pub fn survived(&self, now: f64) -> f64 {
        match self.state {
            NoPauseState::Running => (now - self.started_at).max(0.0),
            _ => self.survived,
        }
    }
}

impl Default for NoPauseDrill {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_silence_while_running_fails_immediately() {
        let mut drill = NoPauseDrill::new();
        drill.start(10.0);
        assert_eq!(drill.state(), NoPauseState::Running);

        drill.on_silence(true, 13.2);
        assert_eq!(drill.state(), NoPauseState::Failed);
        assert!((drill.survived(99.0) - 3.2).abs() < 1e-9);
    }

    #[test]
    fn test_sound_return_does_not_transition() {
        let mut drill = NoPauseDrill::new();
        drill.start(0.0);
        drill.on_silence(false, 1.0);
        assert_eq!(drill.state(), NoPauseState::Running);
    }

    #[test]
    fn test_silence_while_idle_is_ignored() {
        let mut drill = NoPauseDrill::new();
        drill.on_silence(true, 5.0);
        assert_eq!(drill.state(), NoPauseState::Idle);
    }

    #[test]
    fn test_failed_is_terminal_until_retry() {
        let mut drill = NoPauseDrill::new();
        drill.start(0.0);
        drill.fail(4.0);
        // Further silence edges do not change the banked time
        drill.on_silence(true, 9.0);
        assert!((drill.survived(9.0) - 4.0).abs() < 1e-9);

        drill.retry(20.0);
        assert_eq!(drill.state(), NoPauseState::Running);
        assert_eq!(drill.survived(20.0), 0.0);
    }

    #[test]
    fn test_survival_time_is_live_while_running() {
        let mut drill = NoPauseDrill::new();
        drill.start(2.0);
        assert!((drill.survived(5.5) - 3.5).abs() < 1e-9);
    }
}
