use std::collections::HashMap;

use tinyrand::Rand;

use crate::vocab::{Word, WordPack};

/// Per-rhyme-key word supply.
///
/// Each key holds a shuffled copy of the pack's word list; dispensing
/// pops from the end, so no word repeats until its pool is exhausted
/// and rebuilt with a fresh shuffle.
#[derive(Debug, Default)]
pub struct PoolSet {
    pools: HashMap<String, Vec<Word>>,
}

impl PoolSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop all pools and refill every key from the pack with a fresh
    /// shuffle. Called on engine reset.
    pub fn rebuild(&mut self, pack: &WordPack, rand: &mut impl Rand) {
        self.pools.clear();
        for (key, words) in &pack.rhyme_map {
            let mut pool = words.clone();
            shuffle(&mut pool, rand);
            self.pools.insert(key.clone(), pool);
        }
    }

    /// Take one word for `rhyme_key`. An exhausted or missing pool is
    /// rebuilt from the pack first; a key the pack doesn't define at all
    /// yields the placeholder word instead of failing.
    pub fn dispense(&mut self, rhyme_key: &str, pack: &WordPack, rand: &mut impl Rand) -> Word {
        let pool = self.pools.entry(rhyme_key.to_string()).or_default();

        if pool.is_empty() {
            match pack.words_for(rhyme_key) {
                Some(words) if !words.is_empty() => {
                    *pool = words.to_vec();
                    shuffle(pool, rand);
                }
                _ => return Word::placeholder(rhyme_key),
            }
        }

        match pool.pop() {
            Some(word) => word,
            None => Word::placeholder(rhyme_key),
        }
    }

    /// Words left before the pool for `rhyme_key` cycles.
    pub fn remaining(&self, rhyme_key: &str) -> usize {
        self.pools.get(rhyme_key).map_or(0, Vec::len)
    }
}

/// Uniform in-place Fisher-Yates shuffle.
pub(crate) fn shuffle<T>(items: &mut [T], rand: &mut impl Rand) {
    for i in (1..items.len()).rev() {
        let j = rand.next_lim_usize(i + 1);
        items.swap(i, j);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tinyrand::{Seeded, StdRand};

    fn test_pack() -> WordPack {
        WordPack::from_raw(
            "t",
            "Test",
            "",
            1,
            &[("OW", &["FLOW", "GO", "SLOW", "KNOW", "GOLD"])],
        )
    }

    #[test]
    fn test_no_repeats_until_exhaustion() {
        let pack = test_pack();
        let mut rand = StdRand::seed(42);
        let mut pools = PoolSet::new();
        pools.rebuild(&pack, &mut rand);

        let mut seen = Vec::new();
        for _ in 0..5 {
            let word = pools.dispense("OW", &pack, &mut rand);
            assert!(!seen.contains(&word.text), "repeated {}", word.text);
            seen.push(word.text);
        }
        // Sixth draw cycles: pool rebuilt, word comes from the same set
        let sixth = pools.dispense("OW", &pack, &mut rand);
        assert!(seen.contains(&sixth.text));
    }

    #[test]
    fn test_shuffle_preserves_contents() {
        let mut rand = StdRand::seed(7);
        let mut items: Vec<u32> = (0..32).collect();
        shuffle(&mut items, &mut rand);
        let mut sorted = items.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..32).collect::<Vec<u32>>());
    }

    #[test]
    fn test_unknown_key_yields_placeholder() {
        let pack = test_pack();
        let mut rand = StdRand::seed(1);
        let mut pools = PoolSet::new();
        pools.rebuild(&pack, &mut rand);

        let word = pools.dispense("ZZ", &pack, &mut rand);
        assert_eq!(word.text, "???");
        assert_eq!(word.rhyme_key, "ZZ");
    }

    #[test]
    fn test_rebuild_refills_exhausted_pools() {
        let pack = test_pack();
        let mut rand = StdRand::seed(3);
        let mut pools = PoolSet::new();
        pools.rebuild(&pack, &mut rand);
        assert_eq!(pools.remaining("OW"), 5);

        for _ in 0..5 {
            pools.dispense("OW", &pack, &mut rand);
        }
        assert_eq!(pools.remaining("OW"), 0);

        pools.rebuild(&pack, &mut rand);
        assert_eq!(pools.remaining("OW"), 5);
    }
}
