//! Category queries. Categories are language-agnostic; a language's category
//! list is derived from the words that tag them.

use rusqlite::{params, Connection, Result};

use crate::domain::Category;

pub fn get_all_categories(conn: &Connection) -> Result<Vec<Category>> {
  let mut stmt = conn.prepare(
    "SELECT category_id, category_name FROM categories ORDER BY category_name",
  )?;

  let categories = stmt
    .query_map([], row_to_category)?
    .collect::<Result<Vec<_>>>()?;
  Ok(categories)
}

/// Categories that have at least one word in the given language.
pub fn get_categories_for_language(conn: &Connection, language_name: &str) -> Result<Vec<Category>> {
  let mut stmt = conn.prepare(
    r#"
    SELECT DISTINCT categories.category_id, categories.category_name
    FROM categories
    JOIN words ON categories.category_id = words.category_id
    JOIN languages ON words.language_id = languages.language_id
    WHERE languages.language_name = ?1
    ORDER BY categories.category_name
    "#,
  )?;

  let categories = stmt
    .query_map(params![language_name], row_to_category)?
    .collect::<Result<Vec<_>>>()?;
  Ok(categories)
}

pub fn insert_category(conn: &Connection, category_name: &str) -> Result<Category> {
  conn.execute(
    "INSERT INTO categories (category_name) VALUES (?1)",
    params![category_name],
  )?;
  Ok(Category {
    category_id: conn.last_insert_rowid(),
    category_name: category_name.to_string(),
  })
}

/// Insert a category if it does not exist yet, returning its id either way.
pub fn ensure_category(conn: &Connection, category_name: &str) -> Result<i64> {
  conn.execute(
    "INSERT OR IGNORE INTO categories (category_name) VALUES (?1)",
    params![category_name],
  )?;
  conn.query_row(
    "SELECT category_id FROM categories WHERE category_name = ?1",
    params![category_name],
    |row| row.get(0),
  )
}

fn row_to_category(row: &rusqlite::Row) -> Result<Category> {
  Ok(Category {
    category_id: row.get(0)?,
    category_name: row.get(1)?,
  })
}
