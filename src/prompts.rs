//! Freestyle prompt generator: topics and single-word cues for open
//! practice sessions.

use tinyrand::{Rand, Seeded, StdRand};

use crate::pattern::pool::shuffle;
use crate::DEFAULT_SEED;

const TOPICS: &[&str] = &[
    "City Life",
    "Future Tech",
    "Underground",
    "Outer Space",
    "Ancient History",
    "Love & Heartbreak",
    "Hustle",
    "Nature",
];

const WORDS: &[&str] = &[
    "Glitch", "Neon", "Shadow", "Rhythm", "Power", "Cyber", "Flow", "System", "Data", "Pulse",
    "Circuit", "Echo", "Void", "Matrix", "Signal", "Noise",
];

/// Draws topics and cue words for freestyle practice.
pub struct PromptDeck {
    rand: StdRand,
}

impl PromptDeck {
    pub fn new() -> Self {
        Self::seeded(DEFAULT_SEED)
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rand: StdRand::seed(seed),
        }
    }

    /// A random session topic.
    pub fn topic(&mut self) -> &'static str {
        TOPICS[self.rand.next_lim_usize(TOPICS.len())]
    }

    /// A single random cue word.
    pub fn word(&mut self) -> &'static str {
        WORDS[self.rand.next_lim_usize(WORDS.len())]
    }

    /// `count` distinct cue words (capped at the deck size).
    pub fn words(&mut self, count: usize) -> Vec<&'static str> {
        let mut deck: Vec<&'static str> = WORDS.to_vec();
        shuffle(&mut deck, &mut self.rand);
        deck.truncate(count);
        deck
    }
}

impl Default for PromptDeck {
    fn default() -> Self {
        Self::new()
    }
}
