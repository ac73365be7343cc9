//! In-memory storage for quiz sessions.
//!
//! Stores QuizSession state keyed by session ID, owned by the application
//! state rather than a module-level static so tests get per-instance
//! isolation. Sessions auto-expire after a configurable duration of
//! inactivity. All mutation happens under the store's lock, which is what
//! serializes duplicate concurrent submits against the same session.

use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use std::sync::Mutex;

use crate::config;
use crate::quiz::QuizSession;

/// Session entry with last access time for expiration
struct SessionEntry {
  session: QuizSession,
  last_access: DateTime<Utc>,
}

/// Store of live quiz sessions.
#[derive(Default)]
pub struct SessionStore {
  sessions: Mutex<HashMap<String, SessionEntry>>,
}

impl SessionStore {
  pub fn new() -> Self {
    Self::default()
  }

  /// Insert a new session under a freshly generated ID and return the ID.
  pub fn insert(&self, session: QuizSession) -> String {
    let session_id = generate_session_id();
    let mut sessions = self.sessions.lock().expect("Session store lock poisoned");

    // Clean up expired sessions occasionally (~10% chance)
    if rand::random::<u8>() < config::SESSION_CLEANUP_THRESHOLD {
      cleanup_expired(&mut sessions);
    }

    sessions.insert(
      session_id.clone(),
      SessionEntry {
        session,
        last_access: Utc::now(),
      },
    );
    session_id
  }

  /// Look up a session by ID, refreshing its last-access time.
  pub fn get(&self, session_id: &str) -> Option<QuizSession> {
    let mut sessions = self.sessions.lock().expect("Session store lock poisoned");
    let entry = sessions.get_mut(session_id)?;
    entry.last_access = Utc::now();
    Some(entry.session.clone())
  }

  /// Run `f` against a session in place, under the store lock. Returns
  /// `None` for an unknown ID.
  pub fn with_session<T>(
    &self,
    session_id: &str,
    f: impl FnOnce(&mut QuizSession) -> T,
  ) -> Option<T> {
    let mut sessions = self.sessions.lock().expect("Session store lock poisoned");
    let entry = sessions.get_mut(session_id)?;
    entry.last_access = Utc::now();
    Some(f(&mut entry.session))
  }
}

/// Clean up expired sessions
fn cleanup_expired(sessions: &mut HashMap<String, SessionEntry>) {
  let expiry = Utc::now() - Duration::hours(config::SESSION_EXPIRY_HOURS);
  sessions.retain(|_, entry| entry.last_access > expiry);
}

/// Generate a new session ID
pub fn generate_session_id() -> String {
  use rand::Rng;
  let mut rng = rand::rng();
  (0..32)
    .map(|_| {
      let idx = rng.random_range(0..36);
      if idx < 10 {
        (b'0' + idx) as char
      } else {
        (b'a' + idx - 10) as char
      }
    })
    .collect()
}
