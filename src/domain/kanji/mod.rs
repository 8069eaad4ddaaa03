pub mod kana;
pub mod model;

pub use kana::katakana_to_hiragana;
pub use model::{CharacterEntry, Dataset, Reading, ReadingKind};
