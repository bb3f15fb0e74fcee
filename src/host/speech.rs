/// A host speech-to-text adapter. Results flow the other way: the host
/// invokes the active drill's `on_speech(text, is_final)` as fragments
/// arrive, with interim fragments superseded until a final one lands.
pub trait SpeechSource {
    fn start(&mut self);
    fn stop(&mut self);
}

/// Filler words flagged during transcription.
const FILLERS: &[&str] = &["um", "uh", "umm", "ahh", "like", "likes"];

/// Last word of a spoken phrase, stripped of whitespace.
pub fn last_word(text: &str) -> Option<&str> {
    text.split_whitespace().last()
}

/// If the phrase trails off into a filler word, return it.
pub fn trailing_filler(text: &str) -> Option<&str> {
    let last = last_word(text)?;
    FILLERS
        .iter()
        .find(|f| last.eq_ignore_ascii_case(f))
        .copied()
}
