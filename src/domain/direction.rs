use serde::{Deserialize, Serialize};

use super::VocabularyItem;

/// Which side of a word pair is shown as the question and which is expected
/// as the answer. Fixed for a whole quiz session at creation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
  /// Question is the foreign word, expected answer the Finnish one.
  #[default]
  ForeignToNative,
  /// Question is the Finnish word, expected answer the foreign one.
  NativeToForeign,
}

impl Direction {
  /// The text shown to the student for this item.
  pub fn question<'a>(&self, item: &'a VocabularyItem) -> &'a str {
    match self {
      Self::ForeignToNative => &item.foreign_word,
      Self::NativeToForeign => &item.finnish_word,
    }
  }

  /// The answer the student is expected to type for this item.
  pub fn expected<'a>(&self, item: &'a VocabularyItem) -> &'a str {
    match self {
      Self::ForeignToNative => &item.finnish_word,
      Self::NativeToForeign => &item.foreign_word,
    }
  }
}
