//! Storage interface consumed by the quiz core.
//!
//! The pool selector and the legacy validation path never touch the
//! database directly; they go through [`WordStore`], injected at
//! construction time. Production uses [`SqliteWordStore`] over the shared
//! connection; tests inject an in-memory double.

use std::collections::HashSet;

use crate::db::{self, DbPool};
use crate::domain::VocabularyItem;

/// Errors the storage collaborator can surface to the core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
  /// The requested language is not known.
  LanguageNotFound(String),
  /// No word with that id exists for the language.
  WordNotFound(i64),
  /// The storage backend itself failed. Not retried; the caller decides.
  Unavailable(String),
}

impl std::fmt::Display for StoreError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::LanguageNotFound(name) => write!(f, "Language ({}) not found", name),
      Self::WordNotFound(id) => write!(f, "ID ({}) not found", id),
      Self::Unavailable(msg) => write!(f, "Storage unavailable: {}", msg),
    }
  }
}

impl std::error::Error for StoreError {}

/// Read access to the vocabulary, as the quiz core needs it.
pub trait WordStore: Send + Sync {
  /// Words for a language, optionally narrowed to categories; an empty set
  /// means all categories. Order must be stable across identical calls.
  fn fetch_words_by_language_and_categories(
    &self,
    language_name: &str,
    category_ids: &HashSet<i64>,
  ) -> Result<Vec<VocabularyItem>, StoreError>;

  /// A single word pair by id within a language.
  fn fetch_word_by_language_and_id(
    &self,
    language_name: &str,
    word_id: i64,
  ) -> Result<VocabularyItem, StoreError>;
}

/// [`WordStore`] over the shared SQLite connection.
pub struct SqliteWordStore {
  pool: DbPool,
}

impl SqliteWordStore {
  pub fn new(pool: DbPool) -> Self {
    Self { pool }
  }
}

impl WordStore for SqliteWordStore {
  fn fetch_words_by_language_and_categories(
    &self,
    language_name: &str,
    category_ids: &HashSet<i64>,
  ) -> Result<Vec<VocabularyItem>, StoreError> {
    let conn = db::try_lock(&self.pool).map_err(|e| StoreError::Unavailable(e.to_string()))?;

    let language = db::find_language(&conn, language_name)
      .map_err(|e| StoreError::Unavailable(e.to_string()))?
      .ok_or_else(|| StoreError::LanguageNotFound(language_name.to_string()))?;

    db::get_words_by_language_and_categories(&conn, language.language_id, category_ids)
      .map_err(|e| StoreError::Unavailable(e.to_string()))
  }

  fn fetch_word_by_language_and_id(
    &self,
    language_name: &str,
    word_id: i64,
  ) -> Result<VocabularyItem, StoreError> {
    let conn = db::try_lock(&self.pool).map_err(|e| StoreError::Unavailable(e.to_string()))?;

    let language = db::find_language(&conn, language_name)
      .map_err(|e| StoreError::Unavailable(e.to_string()))?
      .ok_or_else(|| StoreError::LanguageNotFound(language_name.to_string()))?;

    db::get_word_by_language_and_id(&conn, language.language_id, word_id)
      .map_err(|e| StoreError::Unavailable(e.to_string()))?
      .ok_or(StoreError::WordNotFound(word_id))
  }
}
