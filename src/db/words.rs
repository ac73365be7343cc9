//! Word-pair CRUD and quiz-pool queries.

use std::collections::HashSet;

use rusqlite::{params, params_from_iter, Connection, OptionalExtension, Result};

use crate::domain::{VocabularyItem, WordWithCategory};

use super::categories::ensure_category;
use super::languages::ensure_language;

pub fn insert_word(
  conn: &Connection,
  language_id: i64,
  category_id: i64,
  foreign_word: &str,
  finnish_word: &str,
) -> Result<i64> {
  conn.execute(
    r#"
    INSERT INTO words (language_id, category_id, foreign_word, finnish_word)
    VALUES (?1, ?2, ?3, ?4)
    "#,
    params![language_id, category_id, foreign_word, finnish_word],
  )?;
  Ok(conn.last_insert_rowid())
}

/// Save a word pair the way the curation flow submits it: language and
/// category arrive as names and are created on first use.
pub fn save_word_pair(
  conn: &Connection,
  language_name: &str,
  category_name: &str,
  foreign_word: &str,
  finnish_word: &str,
) -> Result<i64> {
  let language_id = ensure_language(conn, language_name)?;
  let category_id = ensure_category(conn, category_name)?;
  insert_word(conn, language_id, category_id, foreign_word, finnish_word)
}

/// All word pairs for a language, joined with their category names.
pub fn get_words_by_language(conn: &Connection, language_name: &str) -> Result<Vec<WordWithCategory>> {
  let mut stmt = conn.prepare(
    r#"
    SELECT words.word_id, words.foreign_word, words.finnish_word, categories.category_name
    FROM words
    JOIN categories ON words.category_id = categories.category_id
    JOIN languages ON words.language_id = languages.language_id
    WHERE languages.language_name = ?1
    ORDER BY words.word_id
    "#,
  )?;

  let words = stmt
    .query_map(params![language_name], |row| {
      Ok(WordWithCategory {
        word_id: row.get(0)?,
        foreign_word: row.get(1)?,
        finnish_word: row.get(2)?,
        category_name: row.get(3)?,
      })
    })?
    .collect::<Result<Vec<_>>>()?;
  Ok(words)
}

/// Words for a language, optionally narrowed to a set of categories.
///
/// An empty `category_ids` means every category. The returned order is
/// `word_id` ascending, so repeated calls with the same filter are stable.
/// Category ids are bound as placeholders, never spliced into the SQL.
pub fn get_words_by_language_and_categories(
  conn: &Connection,
  language_id: i64,
  category_ids: &HashSet<i64>,
) -> Result<Vec<VocabularyItem>> {
  if category_ids.is_empty() {
    let mut stmt = conn.prepare(
      r#"
      SELECT word_id, language_id, category_id, foreign_word, finnish_word
      FROM words
      WHERE language_id = ?1
      ORDER BY word_id
      "#,
    )?;
    let words = stmt
      .query_map(params![language_id], row_to_item)?
      .collect::<Result<Vec<_>>>()?;
    return Ok(words);
  }

  let placeholders = (2..=category_ids.len() + 1)
    .map(|i| format!("?{}", i))
    .collect::<Vec<_>>()
    .join(", ");
  let query = format!(
    r#"
    SELECT word_id, language_id, category_id, foreign_word, finnish_word
    FROM words
    WHERE language_id = ?1 AND category_id IN ({})
    ORDER BY word_id
    "#,
    placeholders
  );

  let mut stmt = conn.prepare(&query)?;
  let mut values: Vec<i64> = vec![language_id];
  values.extend(category_ids.iter().copied());

  let words = stmt
    .query_map(params_from_iter(values), row_to_item)?
    .collect::<Result<Vec<_>>>()?;
  Ok(words)
}

/// A single word pair in a language, for the legacy validation path.
pub fn get_word_by_language_and_id(
  conn: &Connection,
  language_id: i64,
  word_id: i64,
) -> Result<Option<VocabularyItem>> {
  conn
    .query_row(
      r#"
      SELECT word_id, language_id, category_id, foreign_word, finnish_word
      FROM words
      WHERE word_id = ?1 AND language_id = ?2
      "#,
      params![word_id, language_id],
      row_to_item,
    )
    .optional()
}

/// Update the editable fields of a word pair. `None` leaves a field alone.
pub fn update_word(
  conn: &Connection,
  word_id: i64,
  foreign_word: Option<&str>,
  finnish_word: Option<&str>,
  category_id: Option<i64>,
) -> Result<usize> {
  let mut changed = 0;
  if let Some(foreign) = foreign_word {
    changed += conn.execute(
      "UPDATE words SET foreign_word = ?1 WHERE word_id = ?2",
      params![foreign, word_id],
    )?;
  }
  if let Some(finnish) = finnish_word {
    changed += conn.execute(
      "UPDATE words SET finnish_word = ?1 WHERE word_id = ?2",
      params![finnish, word_id],
    )?;
  }
  if let Some(category) = category_id {
    changed += conn.execute(
      "UPDATE words SET category_id = ?1 WHERE word_id = ?2",
      params![category, word_id],
    )?;
  }
  Ok(changed)
}

pub fn delete_word_by_id(conn: &Connection, word_id: i64) -> Result<usize> {
  conn.execute("DELETE FROM words WHERE word_id = ?1", params![word_id])
}

fn row_to_item(row: &rusqlite::Row) -> Result<VocabularyItem> {
  Ok(VocabularyItem {
    word_id: row.get(0)?,
    language_id: row.get(1)?,
    category_id: row.get(2)?,
    foreign_word: row.get(3)?,
    finnish_word: row.get(4)?,
  })
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::db::languages::find_language;
  use crate::testing::TestEnv;

  #[test]
  fn test_empty_category_set_returns_all() {
    let env = TestEnv::new().unwrap();
    env.seed_word("german", "animals", "Hund", "koira").unwrap();
    env.seed_word("german", "food", "Brot", "leipä").unwrap();
    env.seed_word("swedish", "animals", "katt", "kissa").unwrap();
    let lang = find_language(&env.conn, "german").unwrap().unwrap();

    let all = get_words_by_language_and_categories(&env.conn, lang.language_id, &HashSet::new())
      .unwrap();
    assert_eq!(all.len(), 2);
    // Other languages never leak into the pool
    assert!(all.iter().all(|w| w.language_id == lang.language_id));
  }

  #[test]
  fn test_category_filter_narrows_pool() {
    let env = TestEnv::new().unwrap();
    env.seed_word("german", "animals", "Hund", "koira").unwrap();
    env.seed_word("german", "food", "Brot", "leipä").unwrap();
    let lang = find_language(&env.conn, "german").unwrap().unwrap();

    let all = get_words_by_language_and_categories(&env.conn, lang.language_id, &HashSet::new())
      .unwrap();
    let animals_id = all.iter().find(|w| w.foreign_word == "Hund").unwrap().category_id;

    let filtered = get_words_by_language_and_categories(
      &env.conn,
      lang.language_id,
      &HashSet::from([animals_id]),
    )
    .unwrap();
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].foreign_word, "Hund");

    // The unfiltered pool is a superset of any single-category pool
    assert!(filtered.iter().all(|w| all.contains(w)));
  }

  #[test]
  fn test_order_is_stable() {
    let env = TestEnv::new().unwrap();
    env.seed_word("german", "animals", "Hund", "koira").unwrap();
    env.seed_word("german", "animals", "Katze", "kissa").unwrap();
    env.seed_word("german", "animals", "Vogel", "lintu").unwrap();
    let lang = find_language(&env.conn, "german").unwrap().unwrap();

    let first = get_words_by_language_and_categories(&env.conn, lang.language_id, &HashSet::new())
      .unwrap();
    let second = get_words_by_language_and_categories(&env.conn, lang.language_id, &HashSet::new())
      .unwrap();
    assert_eq!(first, second);
  }

  #[test]
  fn test_get_word_by_language_and_id() {
    let env = TestEnv::new().unwrap();
    let word_id = env.seed_word("german", "animals", "Hund", "koira").unwrap();
    let lang = find_language(&env.conn, "german").unwrap().unwrap();

    let word = get_word_by_language_and_id(&env.conn, lang.language_id, word_id)
      .unwrap()
      .unwrap();
    assert_eq!(word.finnish_word, "koira");

    // Same id under a different language does not resolve
    let other = ensure_language(&env.conn, "swedish").unwrap();
    assert!(get_word_by_language_and_id(&env.conn, other, word_id).unwrap().is_none());
  }

  #[test]
  fn test_update_word_partial() {
    let env = TestEnv::new().unwrap();
    let word_id = env.seed_word("german", "animals", "Hund", "koira").unwrap();
    let lang = find_language(&env.conn, "german").unwrap().unwrap();

    update_word(&env.conn, word_id, None, Some("koiranpentu"), None).unwrap();

    let word = get_word_by_language_and_id(&env.conn, lang.language_id, word_id)
      .unwrap()
      .unwrap();
    assert_eq!(word.foreign_word, "Hund");
    assert_eq!(word.finnish_word, "koiranpentu");
  }

  #[test]
  fn test_delete_word() {
    let env = TestEnv::new().unwrap();
    let word_id = env.seed_word("german", "animals", "Hund", "koira").unwrap();
    assert_eq!(delete_word_by_id(&env.conn, word_id).unwrap(), 1);
    assert_eq!(delete_word_by_id(&env.conn, word_id).unwrap(), 0);
  }
}
