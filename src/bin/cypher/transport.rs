//! System-clock transport: stands in for an audio player's playback
//! clock. Elapsed time comes from `Instant`, so the beat grid is exact
//! even though no audio is produced.

use std::time::Instant;

use cypher_trainer::host::TransportClock;

pub struct SystemTransport {
    bpm: f64,
    started: Option<Instant>,
}

impl SystemTransport {
    pub fn new(bpm: f64) -> Self {
        Self { bpm, started: None }
    }

    /// Toggle playback. Stopping forgets the position; the next start
    /// begins a fresh session at bar zero.
    pub fn toggle(&mut self) {
        self.started = match self.started {
            Some(_) => None,
            None => Some(Instant::now()),
        };
    }

}

impl TransportClock for SystemTransport {
    fn elapsed_seconds(&self) -> f64 {
        self.started.map_or(0.0, |t| t.elapsed().as_secs_f64())
    }

    fn bpm(&self) -> f64 {
        self.bpm
    }

    fn is_running(&self) -> bool {
        self.started.is_some()
    }
}
