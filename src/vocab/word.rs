use serde::{Deserialize, Serialize};

/// A single vocabulary entry, bucketed by the vowel sound it rhymes on.
///
/// Immutable once built from source data; the pattern engine hands out
/// clones, never references into a pack.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word {
    /// The word itself, stored uppercase (e.g. "RHYME")
    pub text: String,
    /// Heuristic syllable count, always >= 1
    pub syllables: u8,
    /// Rhyme-sound bucket this word belongs to (e.g. "AY")
    pub rhyme_key: String,
    /// Free-form grouping tags ("slang", "food", ...)
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Word {
    /// Build a word from raw text, deriving its syllable count.
    pub fn new(text: &str, rhyme_key: &str) -> Self {
        Self {
            text: text.to_uppercase(),
            syllables: count_syllables(text),
            rhyme_key: rhyme_key.to_string(),
            tags: Vec::new(),
        }
    }

    /// Sentinel returned when a rhyme key has no words at all.
    /// A missing rhyme target must not crash an in-progress drill.
    pub fn placeholder(rhyme_key: &str) -> Self {
        Self {
            text: "???".to_string(),
            syllables: 1,
            rhyme_key: rhyme_key.to_string(),
            tags: Vec::new(),
        }
    }
}

/// Heuristic syllable counter.
///
/// Short words count as one syllable. Silent endings ("-es" after a
/// consonant, "-ed", "-e" after a consonant) are stripped, a leading "y"
/// is treated as a consonant, and each remaining vowel group counts once.
/// Approximate by design; close enough for difficulty tiering.
pub fn count_syllables(word: &str) -> u8 {
    let cleaned: String = word
        .chars()
        .filter(|c| c.is_ascii_alphabetic())
        .map(|c| c.to_ascii_lowercase())
        .collect();

    if cleaned.len() <= 3 {
        return 1;
    }

    let stem = strip_silent_ending(&cleaned);
    let stem = stem.strip_prefix('y').unwrap_or(stem);

    let mut count = 0u32;
    let mut run = 0u32;
    for c in stem.chars() {
        if is_vowel(c) {
            run += 1;
        } else {
            // A vowel run of 1-2 letters is one syllable nucleus
            count += run.div_ceil(2);
            run = 0;
        }
    }
    count += run.div_ceil(2);

    count.max(1) as u8
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y')
}

/// Characters that keep a trailing "-es"/"-e" audible (vowels plus "l",
/// as in "tables", "battle").
fn keeps_ending_audible(c: char) -> bool {
    is_vowel(c) || c == 'l'
}

fn strip_silent_ending(word: &str) -> &str {
    let chars: Vec<char> = word.chars().collect();
    let n = chars.len();

    if n >= 3 && chars[n - 2] == 'e' && chars[n - 1] == 's' && !keeps_ending_audible(chars[n - 3]) {
        return &word[..n - 2];
    }
    if n >= 2 && chars[n - 2] == 'e' && chars[n - 1] == 'd' {
        return &word[..n - 2];
    }
    if n >= 2 && chars[n - 1] == 'e' && !keeps_ending_audible(chars[n - 2]) {
        return &word[..n - 1];
    }
    word
}
