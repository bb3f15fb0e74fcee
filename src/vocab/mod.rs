pub mod pack;
pub mod word;

pub use pack::{PackError, PackFilter, WordPack};
pub use word::{count_syllables, Word};
