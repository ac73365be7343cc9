pub mod direction;
pub mod word;

pub use direction::Direction;
pub use word::{Category, Language, LanguageSummary, VocabularyItem, WordSummary, WordWithCategory};
