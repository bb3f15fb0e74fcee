//! Collaborator seams.
//!
//! The engine never touches an audio device, a microphone, or a speech
//! API directly; it reads narrow traits the host platform implements.
//! A missing collaborator degrades the dependent feature and nothing
//! else: drills keep running, they just never see that signal.

pub mod silence;
pub mod speech;

pub use silence::{SilenceGate, DEFAULT_SILENCE_THRESHOLD_MS};
pub use speech::{last_word, trailing_filler, SpeechSource};

/// The playback clock the host owns. Polled, never pushed: audio
/// transports report elapsed time, they don't emit beat events.
pub trait TransportClock {
    /// Seconds since playback started (monotonic while running)
    fn elapsed_seconds(&self) -> f64;
    /// Current tempo in beats per minute
    fn bpm(&self) -> f64;
    fn is_running(&self) -> bool;
}

/// Text-to-speech output for scripted battle lines.
pub trait Narrator {
    fn speak(&mut self, text: &str);
    /// Cancel any in-flight narration.
    fn cancel(&mut self);
}

/// No-op narrator for hosts without a speech synthesis engine.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullNarrator;

impl Narrator for NullNarrator {
    fn speak(&mut self, _text: &str) {}
    fn cancel(&mut self) {}
}
