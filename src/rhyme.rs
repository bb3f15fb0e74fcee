//! Heuristic vowel-sound classification for rhyme matching.
//!
//! A small lookup table handles the common drill vocabulary; suffix
//! heuristics catch the rest. The keys are a simplified Arpabet-like set:
//! AA (fAther), AE (cAt), AH (cUt), AO (dOg), AW (fOUl), AY (fIle),
//! EH (bEt), ER (bUrn), EY (stAy), IH (sIt), IY (sEE), OW (gO),
//! OY (tOy), UH (bOOk), UW (fOOd).
//!
//! Deliberately approximate: two words "rhyme" when their primary vowel
//! sounds match. Anything the heuristics cannot place is treated as a
//! non-match rather than a guess.

use tinyrand::Rand;

/// Lookup for words whose vowel sound the suffix heuristics get wrong
/// or cannot reach.
const VOWEL_MAP: &[(&str, &str)] = &[
    // AE (Cat, Bat, Rap)
    ("CAT", "AE"),
    ("BAT", "AE"),
    ("HAT", "AE"),
    ("RAP", "AE"),
    ("TAP", "AE"),
    ("MAP", "AE"),
    ("BACK", "AE"),
    ("BLACK", "AE"),
    ("SLACK", "AE"),
    ("TRACK", "AE"),
    ("FACT", "AE"),
    // AY (My, Ride, Time)
    ("MY", "AY"),
    ("FLY", "AY"),
    ("SKY", "AY"),
    ("HIGH", "AY"),
    ("RIDE", "AY"),
    ("SIDE", "AY"),
    ("TIME", "AY"),
    ("RHYME", "AY"),
    ("CLIMB", "AY"),
    ("MIND", "AY"),
    ("GRIND", "AY"),
    ("SHINE", "AY"),
    // OW (Flow, Go, Slow)
    ("FLOW", "OW"),
    ("GO", "OW"),
    ("LOW", "OW"),
    ("SLOW", "OW"),
    ("SHOW", "OW"),
    ("KNOW", "OW"),
    ("CODE", "OW"),
    ("ROAD", "OW"),
    ("MODE", "OW"),
    ("COLD", "OW"),
    ("GOLD", "OW"),
    // EY (Stay, Play, Day)
    ("STAY", "EY"),
    ("PLAY", "EY"),
    ("DAY", "EY"),
    ("WAY", "EY"),
    ("SAY", "EY"),
    ("PAY", "EY"),
    ("GAME", "EY"),
    ("NAME", "EY"),
    ("SAME", "EY"),
    ("LATE", "EY"),
    ("GREAT", "EY"),
    // IY (See, Me, Free)
    ("SEE", "IY"),
    ("ME", "IY"),
    ("FREE", "IY"),
    ("BE", "IY"),
    ("KEY", "IY"),
    ("STREET", "IY"),
    ("HEAT", "IY"),
    ("BEAT", "IY"),
    ("FEET", "IY"),
    ("REAL", "IY"),
    ("FEEL", "IY"),
    // EH (Set, Get, Check)
    ("SET", "EH"),
    ("GET", "EH"),
    ("LET", "EH"),
    ("CHECK", "EH"),
    ("DECK", "EH"),
    ("NECK", "EH"),
    ("STEP", "EH"),
    ("REP", "EH"),
    ("TEXT", "EH"),
    ("NEXT", "EH"),
    ("BEST", "EH"),
];

/// A drill target: a vowel sound plus a human-readable example pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RhymeTarget {
    pub vowel: &'static str,
    pub example: &'static str,
}

/// Targets the timed drill rotates through.
const DRILL_TARGETS: &[RhymeTarget] = &[
    RhymeTarget { vowel: "AE", example: "Cat / Bat" },
    RhymeTarget { vowel: "AY", example: "Time / Shine" },
    RhymeTarget { vowel: "OW", example: "Flow / Go" },
    RhymeTarget { vowel: "EY", example: "Play / Stay" },
    RhymeTarget { vowel: "IY", example: "See / Free" },
    RhymeTarget { vowel: "EH", example: "Check / Deck" },
];

/// Extract the primary stressed vowel sound of a word, or `None` when the
/// heuristics cannot place it.
pub fn vowel_sound(word: &str) -> Option<&'static str> {
    let upper: String = word
        .chars()
        .filter(|c| c.is_ascii_alphabetic())
        .map(|c| c.to_ascii_uppercase())
        .collect();
    if upper.is_empty() {
        return None;
    }

    if let Some(&(_, sound)) = VOWEL_MAP.iter().find(|(w, _)| *w == upper) {
        return Some(sound);
    }

    // Rough suffix fallback
    let ends = |suffixes: &[&str]| suffixes.iter().any(|s| upper.ends_with(s));
    if ends(&["IGHT", "ITE", "IME", "INE"]) {
        return Some("AY");
    }
    if ends(&["AY", "ATE", "AKE", "AME"]) {
        return Some("EY");
    }
    if ends(&["OW", "ODE", "OAD", "ONE"]) {
        return Some("OW");
    }
    if ends(&["EE", "EA", "EET"]) {
        return Some("IY");
    }
    if ends(&["CK", "AP", "AT", "AD"]) {
        return Some("AE");
    }

    None
}

/// Do two words share a vowel sound? Unknown words never match.
pub fn is_rhyme(a: &str, b: &str) -> bool {
    match (vowel_sound(a), vowel_sound(b)) {
        (Some(va), Some(vb)) => va == vb,
        _ => false,
    }
}

/// Does a word carry a specific target vowel sound?
pub fn matches_vowel(word: &str, target_vowel: &str) -> bool {
    vowel_sound(word) == Some(target_vowel)
}

/// Draw a random drill target.
pub fn random_target(rand: &mut impl Rand) -> RhymeTarget {
    DRILL_TARGETS[rand.next_lim_usize(DRILL_TARGETS.len())]
}
