//! Test utilities for database setup.
//!
//! Provides helpers that reuse the authoritative schema initialization,
//! eliminating schema duplication in test code.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use rusqlite::Connection;
use tempfile::TempDir;

use crate::db::{self, DbPool};

/// Test environment with a vocabulary database using the authoritative schema.
///
/// The database lives in a temporary directory, ensuring automatic cleanup
/// when dropped.
pub struct TestEnv {
    /// Temporary directory (kept alive for database file persistence)
    pub temp: TempDir,
    /// Direct connection for seeding and assertions
    pub conn: Connection,
    db_path: PathBuf,
}

impl TestEnv {
    /// Create a test environment with the schema applied.
    pub fn new() -> rusqlite::Result<Self> {
        let temp =
            TempDir::new().map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?;

        let db_path = temp.path().join("sanakoe.db");
        let conn = Connection::open(&db_path)?;
        db::schema::run_migrations(&conn)?;

        Ok(Self { temp, conn, db_path })
    }

    /// Insert a word pair, creating the language and category rows on demand.
    /// Returns the new word id.
    pub fn seed_word(
        &self,
        language: &str,
        category: &str,
        foreign_word: &str,
        finnish_word: &str,
    ) -> rusqlite::Result<i64> {
        db::save_word_pair(&self.conn, language, category, foreign_word, finnish_word)
    }

    /// A shared pool over the same database file, for code that takes `DbPool`.
    pub fn pool(&self) -> DbPool {
        let conn = Connection::open(&self.db_path).expect("open test database");
        db::schema::run_migrations(&conn).expect("apply test schema");
        Arc::new(Mutex::new(conn))
    }

    /// Get the temporary directory path for creating test files.
    pub fn path(&self) -> &Path {
        self.temp.path()
    }
}
