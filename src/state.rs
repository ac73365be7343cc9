//! Application state shared across handlers.

use std::sync::Arc;

use crate::db::DbPool;
use crate::quiz::PoolSelector;
use crate::session::SessionStore;
use crate::store::{SqliteWordStore, WordStore};

/// Application state passed to all handlers.
///
/// Storage is held behind the [`WordStore`] trait and injected at
/// construction time; nothing reaches for a module-level connection.
#[derive(Clone)]
pub struct AppState {
    /// Shared vocabulary database (curation CRUD goes straight to it)
    pub pool: DbPool,

    /// Storage interface the quiz core reads through
    pub store: Arc<dyn WordStore>,

    /// Live quiz sessions
    pub sessions: Arc<SessionStore>,
}

impl AppState {
    /// Production wiring: SQLite-backed store over the shared pool.
    pub fn new(pool: DbPool) -> Self {
        let store: Arc<dyn WordStore> = Arc::new(SqliteWordStore::new(pool.clone()));
        Self {
            pool,
            store,
            sessions: Arc::new(SessionStore::new()),
        }
    }

    pub fn pool_selector(&self) -> PoolSelector {
        PoolSelector::new(self.store.clone())
    }
}
