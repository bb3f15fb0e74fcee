//! Training-mode state machines.
//!
//! Each drill is a small finite-state controller advanced by the host's
//! scheduling loop: time comes in as an explicit `now` parameter
//! (seconds on any monotonic clock), collaborator signals arrive as
//! method calls. No drill owns a timer, so stopping a session cannot
//! race a late-firing callback.

pub mod battle;
pub mod no_pause;
pub mod timed;

pub use battle::{BattleMachine, BattlePhase};
pub use no_pause::{NoPauseDrill, NoPauseState};
pub use timed::TimedRhymeChallenge;
