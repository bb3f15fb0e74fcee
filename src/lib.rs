pub mod beat;
pub mod drills; // Training-mode state machines
pub mod host; // Collaborator seams (transport, narration, speech, silence)
pub mod pattern; // Rhyme-scheme pattern engine
pub mod prompts;
pub mod rhyme;
pub mod timing; // Beat-phase clock
pub mod vocab; // Word packs and vocabulary

/// Fixed meter: every bar is four beats.
pub const BEATS_PER_BAR: u8 = 4;

/// Default verse length in bars. Rhyme-key assignments per pattern slot
/// letter hold for one verse, then are redrawn.
pub const DEFAULT_BARS_PER_VERSE: u64 = 16;

pub(crate) const DEFAULT_SEED: u64 = 0x9e37_79b9_7f4a_7c15;
