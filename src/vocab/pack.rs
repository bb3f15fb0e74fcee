use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::word::Word;

/// A vocabulary pack: words grouped by rhyme-sound key.
///
/// Packs are built once and never mutated; difficulty-tiered variants are
/// independently constructed via [`WordPack::filter`]. Keys iterate in
/// sorted order (`BTreeMap`) so random key draws are reproducible for a
/// given RNG seed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordPack {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// 1 (easy) ..= 5 (hard)
    pub difficulty: u8,
    /// rhyme key -> words; every key present has at least one word
    pub rhyme_map: BTreeMap<String, Vec<Word>>,
}

/// Raw pack format for external JSON sources: words as plain strings,
/// syllable counts derived on load.
#[derive(Debug, Deserialize)]
struct RawPack {
    id: String,
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default = "default_difficulty")]
    difficulty: u8,
    words: BTreeMap<String, Vec<String>>,
}

fn default_difficulty() -> u8 {
    1
}

impl WordPack {
    /// Build a pack from raw `{rhyme key -> [word, ...]}` data.
    /// Keys with no words are dropped to preserve the pack invariant.
    pub fn from_raw(
        id: &str,
        name: &str,
        description: &str,
        difficulty: u8,
        raw: &[(&str, &[&str])],
    ) -> Self {
        let mut rhyme_map = BTreeMap::new();
        for (key, words) in raw {
            if words.is_empty() {
                continue;
            }
            let entries: Vec<Word> = words.iter().map(|w| Word::new(w, key)).collect();
            rhyme_map.insert((*key).to_string(), entries);
        }
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            difficulty,
            rhyme_map,
        }
    }

    /// Load a pack from its JSON source representation.
    pub fn from_json(text: &str) -> Result<Self, PackError> {
        let raw: RawPack = serde_json::from_str(text).map_err(PackError::Parse)?;

        let mut rhyme_map = BTreeMap::new();
        for (key, words) in &raw.words {
            if words.is_empty() {
                continue;
            }
            let entries: Vec<Word> = words.iter().map(|w| Word::new(w, key)).collect();
            rhyme_map.insert(key.clone(), entries);
        }
        if rhyme_map.is_empty() {
            return Err(PackError::Empty { id: raw.id });
        }

        Ok(Self {
            id: raw.id,
            name: raw.name,
            description: raw.description,
            difficulty: raw.difficulty.clamp(1, 5),
            rhyme_map,
        })
    }

    /// The standard built-in vocabulary.
    pub fn builtin() -> Self {
        Self::from_raw(
            "core",
            "Core Pack",
            "The standard hip-hop vocabulary.",
            1,
            BUILTIN_WORDS,
        )
    }

    /// Monosyllabic starter tier, derived from the built-in pack.
    pub fn beginner() -> Self {
        Self::builtin().filter(
            "easy",
            "Beginner Pack",
            "Simple, monosyllabic words. Great for starting out.",
            1,
            &PackFilter::new().max_syllables(1),
        )
    }

    /// Mid tier: short and medium words.
    pub fn flow_state() -> Self {
        Self::builtin().filter(
            "med",
            "Flow State",
            "Standard rhymes with good flow. A mix of short and medium words.",
            3,
            &PackFilter::new().min_syllables(1).max_syllables(3),
        )
    }

    /// Hard tier: long, multisyllabic words only.
    pub fn master_class() -> Self {
        Self::builtin().filter(
            "hard",
            "Master Class",
            "Complex multisyllabic rhymes for advanced lyricists.",
            5,
            &PackFilter::new().min_syllables(2).min_length(6),
        )
    }

    /// Derive a new pack by filtering this one. The source pack is left
    /// untouched; keys whose words are all filtered out are omitted.
    pub fn filter(
        &self,
        id: &str,
        name: &str,
        description: &str,
        difficulty: u8,
        filter: &PackFilter,
    ) -> Self {
        let mut rhyme_map = BTreeMap::new();
        for (key, words) in &self.rhyme_map {
            let kept: Vec<Word> = words.iter().filter(|w| filter.keeps(w)).cloned().collect();
            if !kept.is_empty() {
                rhyme_map.insert(key.clone(), kept);
            }
        }
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            difficulty,
            rhyme_map,
        }
    }

    /// Sorted rhyme keys in this pack.
    pub fn rhyme_keys(&self) -> impl Iterator<Item = &str> {
        self.rhyme_map.keys().map(String::as_str)
    }

    pub fn key_count(&self) -> usize {
        self.rhyme_map.len()
    }

    pub fn words_for(&self, rhyme_key: &str) -> Option<&[Word]> {
        self.rhyme_map.get(rhyme_key).map(Vec::as_slice)
    }

    pub fn is_empty(&self) -> bool {
        self.rhyme_map.is_empty()
    }
}

/// Predicate set for deriving difficulty-tiered packs.
#[derive(Debug, Clone, Copy, Default)]
pub struct PackFilter {
    pub min_syllables: Option<u8>,
    pub max_syllables: Option<u8>,
    pub min_length: Option<usize>,
}

impl PackFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn min_syllables(mut self, n: u8) -> Self {
        self.min_syllables = Some(n);
        self
    }

    pub fn max_syllables(mut self, n: u8) -> Self {
        self.max_syllables = Some(n);
        self
    }

    pub fn min_length(mut self, n: usize) -> Self {
        self.min_length = Some(n);
        self
    }

    fn keeps(&self, word: &Word) -> bool {
        if self.min_syllables.is_some_and(|n| word.syllables < n) {
            return false;
        }
        if self.max_syllables.is_some_and(|n| word.syllables > n) {
            return false;
        }
        if self.min_length.is_some_and(|n| word.text.len() < n) {
            return false;
        }
        true
    }
}

/// Errors from loading an external word pack
#[derive(Debug)]
pub enum PackError {
    /// The source text was not valid pack JSON
    Parse(serde_json::Error),
    /// The pack defined no usable words for any rhyme key
    Empty { id: String },
}

impl std::fmt::Display for PackError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PackError::Parse(err) => write!(f, "invalid word pack JSON: {err}"),
            PackError::Empty { id } => write!(f, "word pack {id:?} has no words"),
        }
    }
}

impl std::error::Error for PackError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PackError::Parse(err) => Some(err),
            PackError::Empty { .. } => None,
        }
    }
}

/// Built-in vocabulary, bucketed by simplified Arpabet-like vowel keys:
/// AE (cAt), AY (fIle), OW (gO), EY (stAy), IY (sEE), EH (bEt)
const BUILTIN_WORDS: &[(&str, &[&str])] = &[
    (
        "AE",
        &[
            "CAT", "BAT", "HAT", "RAP", "TAP", "MAP", "BACK", "BLACK", "SLACK", "TRACK", "FACT",
        ],
    ),
    (
        "AY",
        &[
            "MY", "FLY", "SKY", "HIGH", "RIDE", "SIDE", "TIME", "RHYME", "CLIMB", "MIND", "GRIND",
            "SHINE",
        ],
    ),
    (
        "OW",
        &[
            "FLOW", "GO", "LOW", "SLOW", "SHOW", "KNOW", "CODE", "ROAD", "MODE", "COLD", "GOLD",
        ],
    ),
    (
        "EY",
        &[
            "STAY", "PLAY", "DAY", "WAY", "SAY", "PAY", "GAME", "NAME", "SAME", "LATE", "GREAT",
        ],
    ),
    (
        "IY",
        &[
            "SEE", "ME", "FREE", "BE", "KEY", "STREET", "HEAT", "BEAT", "FEET", "REAL", "FEEL",
        ],
    ),
    (
        "EH",
        &[
            "SET", "GET", "LET", "CHECK", "DECK", "NECK", "STEP", "REP", "TEXT", "NEXT", "BEST",
        ],
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_pack_invariants() {
        let pack = WordPack::builtin();
        assert!(!pack.is_empty());
        assert_eq!(pack.key_count(), 6);
        for (key, words) in &pack.rhyme_map {
            assert!(!words.is_empty(), "key {key} has no words");
            for w in words {
                assert_eq!(&w.rhyme_key, key);
                assert!(w.syllables >= 1);
            }
        }
    }

    #[test]
    fn test_tiered_packs() {
        let beginner = WordPack::beginner();
        assert_eq!(beginner.id, "easy");
        assert!(!beginner.is_empty());
        for words in beginner.rhyme_map.values() {
            for w in words {
                assert_eq!(w.syllables, 1, "{} is not monosyllabic", w.text);
            }
        }

        let flow = WordPack::flow_state();
        assert_eq!(flow.difficulty, 3);
        assert!(!flow.is_empty());

        // The hard tier may prune heavily; whatever survives honors the
        // filter
        let master = WordPack::master_class();
        for words in master.rhyme_map.values() {
            for w in words {
                assert!(w.syllables >= 2);
                assert!(w.text.len() >= 6);
            }
        }
    }

    #[test]
    fn test_filter_never_leaves_empty_keys() {
        let pack = WordPack::builtin();
        // Absurd length requirement: everything is filtered out
        let derived = pack.filter("x", "X", "", 5, &PackFilter::new().min_length(40));
        assert!(derived.is_empty());
        for words in derived.rhyme_map.values() {
            assert!(!words.is_empty());
        }
    }

    #[test]
    fn test_filter_does_not_mutate_source() {
        let pack = WordPack::builtin();
        let before = pack.clone();
        let _ = pack.filter("long", "Long Words", "", 3, &PackFilter::new().min_length(5));
        assert_eq!(pack, before);
    }

    #[test]
    fn test_filter_by_length() {
        let pack = WordPack::builtin();
        let derived = pack.filter("long", "Long", "", 3, &PackFilter::new().min_length(4));
        for words in derived.rhyme_map.values() {
            for w in words {
                assert!(w.text.len() >= 4);
            }
        }
        // Short-word-only keys may vanish entirely, but "AE" keeps BACK etc.
        assert!(derived.words_for("AE").is_some());
    }

    #[test]
    fn test_from_json_round_trip() {
        let text = r#"{
            "id": "mini",
            "name": "Mini",
            "words": { "OW": ["flow", "go"], "AY": ["time"] }
        }"#;
        let pack = WordPack::from_json(text).expect("valid pack");
        assert_eq!(pack.id, "mini");
        assert_eq!(pack.difficulty, 1);
        assert_eq!(pack.words_for("OW").map(<[Word]>::len), Some(2));
        assert_eq!(pack.words_for("AY").map(<[Word]>::len), Some(1));
        // Words are normalized to uppercase with derived syllables
        assert_eq!(pack.words_for("AY").and_then(|w| w.first()).map(|w| w.text.as_str()), Some("TIME"));
    }

    #[test]
    fn test_from_json_rejects_empty_pack() {
        let text = r#"{ "id": "void", "name": "Void", "words": {} }"#;
        assert!(matches!(
            WordPack::from_json(text),
            Err(PackError::Empty { .. })
        ));
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(matches!(
            WordPack::from_json("not json"),
            Err(PackError::Parse(_))
        ));
    }
}
