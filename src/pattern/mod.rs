/*
Rhyme-scheme patterns
=====================

A pattern is a repeating cycle of slot letters, one per bar. Bars that
share a letter must land on the same rhyme sound for the duration of a
verse; the concrete word still changes every bar.

    AABB  ->  bar 0: A, bar 1: A, bar 2: B, bar 3: B, bar 4: A, ...

This module provides:
- `PatternConfig` - the fixed set of selectable schemes
- `pool` - per-rhyme-key shuffled word supply without repetition
- `verses` - per-verse rhyme-key assignment for each slot letter
- `PatternEngine` - the orchestrator tying them together per bar
*/

pub mod engine;
pub mod pool;
pub mod verses;

pub use engine::{BarContent, PatternEngine};

/// A rhyme-scheme template. The slot cycle repeats every
/// `slots.len()` bars.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternConfig {
    pub id: &'static str,
    pub name: &'static str,
    pub slots: &'static [char],
}

impl PatternConfig {
    /// AABB - paired couplets
    pub const COUPLETS: PatternConfig = PatternConfig {
        id: "AABB",
        name: "Couplets",
        slots: &['A', 'A', 'B', 'B'],
    };

    /// ABAB - alternating lines
    pub const ALTERNATE: PatternConfig = PatternConfig {
        id: "ABAB",
        name: "Alternate",
        slots: &['A', 'B', 'A', 'B'],
    };

    /// AAAA - one sound for the whole cycle
    pub const MONO: PatternConfig = PatternConfig {
        id: "AAAA",
        name: "Mono",
        slots: &['A', 'A', 'A', 'A'],
    };

    /// Fallback when a requested pattern id is unknown.
    pub const DEFAULT: PatternConfig = Self::COUPLETS;

    /// Look up one of the built-in patterns.
    pub fn by_id(id: &str) -> Option<PatternConfig> {
        match id {
            "AABB" => Some(Self::COUPLETS),
            "ABAB" => Some(Self::ALTERNATE),
            "AAAA" => Some(Self::MONO),
            _ => None,
        }
    }

    /// All selectable patterns.
    pub fn all() -> &'static [PatternConfig] {
        &[Self::COUPLETS, Self::ALTERNATE, Self::MONO]
    }

    /// Slot letter for a global bar index.
    pub fn slot_at(&self, bar: u64) -> char {
        self.slots[(bar % self.slots.len() as u64) as usize]
    }

    /// Distinct slot letters in first-appearance order.
    pub fn distinct_slots(&self) -> Vec<char> {
        let mut seen = Vec::new();
        for &slot in self.slots {
            if !seen.contains(&slot) {
                seen.push(slot);
            }
        }
        seen
    }
}

/// Display color for a slot letter, from a fixed palette.
pub fn slot_color(slot: char) -> &'static str {
    match slot {
        'A' => "#F97316", // Orange
        'B' => "#3B82F6", // Blue
        'C' => "#22C55E", // Green
        'D' => "#EAB308", // Yellow
        _ => "#FFFFFF",
    }
}
