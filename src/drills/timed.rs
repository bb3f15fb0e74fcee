use tinyrand::{Seeded, StdRand};

use crate::host::last_word;
use crate::rhyme::{matches_vowel, random_target, RhymeTarget};
use crate::DEFAULT_SEED;

/// Bars between unconditional target rotations.
pub const BARS_PER_TARGET: u64 = 4;
/// Points per matched phrase ending.
pub const MATCH_POINTS: u32 = 100;

/// Timed rhyme challenge: hit the target vowel sound with the last word
/// of a phrase before the target rotates.
///
/// The rotation is relentless: every [`BARS_PER_TARGET`] bars a new
/// target is drawn whether or not the previous one was matched. Matches
/// score, misses cost nothing.
pub struct TimedRhymeChallenge {
    running: bool,
    score: u32,
    bars: u64,
    target: Option<RhymeTarget>,
    last_match: Option<String>,
    rand: StdRand,
}

impl TimedRhymeChallenge {
    pub fn new() -> Self {
        Self::seeded(DEFAULT_SEED)
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            running: false,
            score: 0,
            bars: 0,
            target: None,
            last_match: None,
            rand: StdRand::seed(seed),
        }
    }

    /// Start a round: score and bar count reset, first target drawn.
    pub fn start(&mut self) -> RhymeTarget {
        self.running = true;
        self.score = 0;
        self.bars = 0;
        self.last_match = None;
        let target = random_target(&mut self.rand);
        self.target = Some(target);
        target
    }

    pub fn stop(&mut self) {
        self.running = false;
        self.target = None;
    }

    /// Advance one bar (call when the beat clock reports a new bar).
    /// Returns the fresh target when this bar triggered a rotation.
    pub fn on_bar(&mut self) -> Option<RhymeTarget> {
        if !self.running {
            return None;
        }
        self.bars += 1;
        if self.bars % BARS_PER_TARGET == 0 {
            let target = random_target(&mut self.rand);
            self.target = Some(target);
            return Some(target);
        }
        None
    }

    /// Speech fragment from the host. Only final fragments are scored:
    /// the last word of the phrase is checked against the current
    /// target's vowel. Returns the matched word, uppercased.
    pub fn on_speech(&mut self, text: &str, is_final: bool) -> Option<String> {
        if !self.running || !is_final {
            return None;
        }
        let target = self.target?;
        let word = last_word(text)?;

        if matches_vowel(word, target.vowel) {
            self.score += MATCH_POINTS;
            let matched = word.to_uppercase();
            self.last_match = Some(matched.clone());
            return Some(matched);
        }
        None
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn bars(&self) -> u64 {
        self.bars
    }

    pub fn target(&self) -> Option<RhymeTarget> {
        self.target
    }

    pub fn last_match(&self) -> Option<&str> {
        self.last_match.as_deref()
    }
}

impl Default for TimedRhymeChallenge {
    fn default() -> Self {
        Self::new()
    }
}
