use std::collections::HashMap;

use tinyrand::Rand;

use crate::vocab::WordPack;

use super::PatternConfig;

/// Draw attempts before accepting a rhyme-key collision between slot
/// letters of the same verse.
const COLLISION_RETRIES: usize = 20;

/// Per-verse rhyme-key assignment.
///
/// Within one verse every slot letter keeps its rhyme key, so an AABB
/// couplet stays in the same sound family across the verse. A new verse
/// draws fresh assignments. Distinct letters get distinct keys
/// best-effort: after [`COLLISION_RETRIES`] draws a collision stands.
#[derive(Debug, Default)]
pub struct VerseTargets {
    assignments: HashMap<u64, HashMap<char, String>>,
}

impl VerseTargets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.assignments.clear();
    }

    /// Rhyme key for `slot` in `verse`, assigning the whole verse on
    /// first touch.
    pub fn key_for(
        &mut self,
        verse: u64,
        slot: char,
        pattern: &PatternConfig,
        pack: &WordPack,
        rand: &mut impl Rand,
    ) -> String {
        let verse_map = self
            .assignments
            .entry(verse)
            .or_insert_with(|| assign_verse(pattern, pack, rand));

        match verse_map.get(&slot) {
            Some(key) => key.clone(),
            // Slot not in the pattern (or empty pack): the dispenser
            // turns this into a placeholder word downstream
            None => "?".to_string(),
        }
    }
}

fn assign_verse(
    pattern: &PatternConfig,
    pack: &WordPack,
    rand: &mut impl Rand,
) -> HashMap<char, String> {
    let keys: Vec<&str> = pack.rhyme_keys().collect();
    let mut map = HashMap::new();
    if keys.is_empty() {
        return map;
    }

    let mut used: Vec<&str> = Vec::new();
    for slot in pattern.distinct_slots() {
        let mut pick = keys[rand.next_lim_usize(keys.len())];
        let mut attempts = 0;
        while used.contains(&pick) && attempts < COLLISION_RETRIES {
            pick = keys[rand.next_lim_usize(keys.len())];
            attempts += 1;
        }
        used.push(pick);
        map.insert(slot, pick.to_string());
    }
    map
}
