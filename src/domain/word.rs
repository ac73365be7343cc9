use serde::Serialize;

/// A teacher-curated word pair: a foreign word and its Finnish translation,
/// tagged with the language and category it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VocabularyItem {
  pub word_id: i64,
  pub language_id: i64,
  pub category_id: i64,
  pub foreign_word: String,
  pub finnish_word: String,
}

/// The shape the quiz view sees: category metadata stripped.
#[derive(Debug, Clone, Serialize)]
pub struct WordSummary {
  pub word_id: i64,
  pub foreign_word: String,
  pub finnish_word: String,
}

impl From<&VocabularyItem> for WordSummary {
  fn from(item: &VocabularyItem) -> Self {
    Self {
      word_id: item.word_id,
      foreign_word: item.foreign_word.clone(),
      finnish_word: item.finnish_word.clone(),
    }
  }
}

/// A word pair joined with its category name, as the curation views list it.
#[derive(Debug, Clone, Serialize)]
pub struct WordWithCategory {
  pub word_id: i64,
  pub foreign_word: String,
  pub finnish_word: String,
  pub category_name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Language {
  pub language_id: i64,
  pub language_name: String,
}

/// A language together with how many word pairs it holds.
#[derive(Debug, Clone, Serialize)]
pub struct LanguageSummary {
  pub language_id: i64,
  pub language_name: String,
  pub word_count: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct Category {
  pub category_id: i64,
  pub category_name: String,
}
