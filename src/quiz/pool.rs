//! Exercise pool selection.
//!
//! A pool is the snapshot of vocabulary items one quiz session runs
//! through. Selection happens once per session; after that the session
//! never goes back to storage.

use std::collections::HashSet;
use std::sync::Arc;

use crate::domain::VocabularyItem;
use crate::store::{StoreError, WordStore};

/// Selects the vocabulary items a quiz session will quiz on.
///
/// Holds its storage dependency explicitly; there is no ambient
/// connection state, so tests can hand in a double.
pub struct PoolSelector {
  store: Arc<dyn WordStore>,
}

impl PoolSelector {
  pub fn new(store: Arc<dyn WordStore>) -> Self {
    Self { store }
  }

  /// Fetch the pool for a language, narrowed to `category_ids` when
  /// non-empty. An empty result is legal; the caller builds a session
  /// that is complete from the start.
  pub fn select_pool(
    &self,
    language_name: &str,
    category_ids: &HashSet<i64>,
  ) -> Result<Vec<VocabularyItem>, StoreError> {
    let pool = self
      .store
      .fetch_words_by_language_and_categories(language_name, category_ids)?;
    tracing::debug!(
      language = language_name,
      categories = category_ids.len(),
      pool_size = pool.len(),
      "selected exercise pool"
    );
    Ok(pool)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::store::test_support::MemoryWordStore;

  fn item(word_id: i64, category_id: i64, foreign: &str, finnish: &str) -> VocabularyItem {
    VocabularyItem {
      word_id,
      language_id: 1,
      category_id,
      foreign_word: foreign.to_string(),
      finnish_word: finnish.to_string(),
    }
  }

  fn selector() -> PoolSelector {
    let store = MemoryWordStore::with_items(
      "german",
      vec![
        item(1, 10, "Hund", "koira"),
        item(2, 10, "Katze", "kissa"),
        item(3, 20, "Brot", "leipä"),
      ],
    );
    PoolSelector::new(Arc::new(store))
  }

  #[test]
  fn test_empty_categories_selects_everything() {
    let pool = selector().select_pool("german", &HashSet::new()).unwrap();
    assert_eq!(pool.len(), 3);
  }

  #[test]
  fn test_category_filter() {
    let pool = selector().select_pool("german", &HashSet::from([10])).unwrap();
    assert_eq!(pool.len(), 2);
    assert!(pool.iter().all(|w| w.category_id == 10));
  }

  #[test]
  fn test_unfiltered_pool_is_superset_of_filtered() {
    let sel = selector();
    let all = sel.select_pool("german", &HashSet::new()).unwrap();
    let filtered = sel.select_pool("german", &HashSet::from([20])).unwrap();
    assert!(filtered.iter().all(|w| all.contains(w)));
  }

  #[test]
  fn test_unknown_language_fails() {
    let err = selector().select_pool("klingon", &HashSet::new()).unwrap_err();
    assert_eq!(err, StoreError::LanguageNotFound("klingon".to_string()));
  }

  #[test]
  fn test_no_matching_categories_gives_empty_pool() {
    let pool = selector().select_pool("german", &HashSet::from([99])).unwrap();
    assert!(pool.is_empty());
  }
}
