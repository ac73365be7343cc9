use rusqlite::{Connection, Result};

/// Create the vocabulary schema for new databases.
///
/// One fixed set of tables; the language is always a foreign-key filter
/// value, never a table name. Statements are idempotent so startup can
/// run them unconditionally.
pub fn run_migrations(conn: &Connection) -> Result<()> {
  conn.execute_batch(
    r#"
    CREATE TABLE IF NOT EXISTS languages (
      language_id INTEGER PRIMARY KEY AUTOINCREMENT,
      language_name TEXT NOT NULL UNIQUE
    );

    CREATE TABLE IF NOT EXISTS categories (
      category_id INTEGER PRIMARY KEY AUTOINCREMENT,
      category_name TEXT NOT NULL UNIQUE
    );

    CREATE TABLE IF NOT EXISTS words (
      word_id INTEGER PRIMARY KEY AUTOINCREMENT,
      language_id INTEGER NOT NULL,
      category_id INTEGER NOT NULL,
      foreign_word TEXT NOT NULL,
      finnish_word TEXT NOT NULL,
      FOREIGN KEY (language_id) REFERENCES languages(language_id) ON DELETE CASCADE,
      FOREIGN KEY (category_id) REFERENCES categories(category_id)
    );

    -- Indexes
    CREATE INDEX IF NOT EXISTS idx_words_language_id ON words(language_id);
    CREATE INDEX IF NOT EXISTS idx_words_category_id ON words(category_id);
    "#,
  )?;

  // Cascading deletes (language removal takes its words along) need this on
  // every connection; SQLite defaults to off.
  conn.execute_batch("PRAGMA foreign_keys = ON;")?;

  Ok(())
}
