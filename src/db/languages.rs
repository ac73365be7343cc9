//! Language lookups and curation queries.

use rusqlite::{params, Connection, OptionalExtension, Result};

use crate::domain::{Language, LanguageSummary};

/// Look up a language by name. Returns `Ok(None)` when unknown; callers
/// translate that into their 404-equivalent.
pub fn find_language(conn: &Connection, language_name: &str) -> Result<Option<Language>> {
  conn
    .query_row(
      "SELECT language_id, language_name FROM languages WHERE language_name = ?1",
      params![language_name],
      |row| {
        Ok(Language {
          language_id: row.get(0)?,
          language_name: row.get(1)?,
        })
      },
    )
    .optional()
}

/// All languages together with their word counts, for the curation overview.
pub fn get_languages_with_word_count(conn: &Connection) -> Result<Vec<LanguageSummary>> {
  let mut stmt = conn.prepare(
    r#"
    SELECT languages.language_id,
           languages.language_name,
           COUNT(words.word_id) AS word_count
    FROM languages
    LEFT JOIN words ON languages.language_id = words.language_id
    GROUP BY languages.language_id, languages.language_name
    ORDER BY languages.language_name
    "#,
  )?;

  let languages = stmt
    .query_map([], |row| {
      Ok(LanguageSummary {
        language_id: row.get(0)?,
        language_name: row.get(1)?,
        word_count: row.get(2)?,
      })
    })?
    .collect::<Result<Vec<_>>>()?;
  Ok(languages)
}

pub fn insert_language(conn: &Connection, language_name: &str) -> Result<Language> {
  conn.execute(
    "INSERT INTO languages (language_name) VALUES (?1)",
    params![language_name],
  )?;
  let language_id = conn.last_insert_rowid();
  Ok(Language {
    language_id,
    language_name: language_name.to_string(),
  })
}

/// Insert a language if it does not exist yet, returning its id either way.
pub fn ensure_language(conn: &Connection, language_name: &str) -> Result<i64> {
  conn.execute(
    "INSERT OR IGNORE INTO languages (language_name) VALUES (?1)",
    params![language_name],
  )?;
  conn.query_row(
    "SELECT language_id FROM languages WHERE language_name = ?1",
    params![language_name],
    |row| row.get(0),
  )
}

/// Delete a language by id. Words referencing it go with it (FK cascade).
/// Returns the number of deleted rows so callers can 404 on an unknown id.
pub fn delete_language_by_id(conn: &Connection, language_id: i64) -> Result<usize> {
  conn.execute(
    "DELETE FROM languages WHERE language_id = ?1",
    params![language_id],
  )
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::testing::TestEnv;

  #[test]
  fn test_find_language_unknown() {
    let env = TestEnv::new().unwrap();
    assert!(find_language(&env.conn, "klingon").unwrap().is_none());
  }

  #[test]
  fn test_insert_and_find() {
    let env = TestEnv::new().unwrap();
    let lang = insert_language(&env.conn, "german").unwrap();
    let found = find_language(&env.conn, "german").unwrap().unwrap();
    assert_eq!(found.language_id, lang.language_id);
    assert_eq!(found.language_name, "german");
  }

  #[test]
  fn test_ensure_language_is_idempotent() {
    let env = TestEnv::new().unwrap();
    let a = ensure_language(&env.conn, "swedish").unwrap();
    let b = ensure_language(&env.conn, "swedish").unwrap();
    assert_eq!(a, b);
  }

  #[test]
  fn test_word_counts() {
    let env = TestEnv::new().unwrap();
    env.seed_word("german", "animals", "Hund", "koira").unwrap();
    env.seed_word("german", "animals", "Katze", "kissa").unwrap();
    env.seed_word("swedish", "animals", "hund", "koira").unwrap();

    let summaries = get_languages_with_word_count(&env.conn).unwrap();
    let german = summaries.iter().find(|l| l.language_name == "german").unwrap();
    let swedish = summaries.iter().find(|l| l.language_name == "swedish").unwrap();
    assert_eq!(german.word_count, 2);
    assert_eq!(swedish.word_count, 1);
  }

  #[test]
  fn test_delete_language_cascades_to_words() {
    let env = TestEnv::new().unwrap();
    env.seed_word("german", "animals", "Hund", "koira").unwrap();
    let lang = find_language(&env.conn, "german").unwrap().unwrap();

    let deleted = delete_language_by_id(&env.conn, lang.language_id).unwrap();
    assert_eq!(deleted, 1);

    let count: i64 = env
      .conn
      .query_row("SELECT COUNT(*) FROM words", [], |row| row.get(0))
      .unwrap();
    assert_eq!(count, 0);
  }
}
