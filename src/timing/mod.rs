pub mod clock;
pub mod phase;

pub use clock::{BeatClock, DEFAULT_LATENCY_OFFSET};
pub use phase::{phase_at, BeatPhase};
