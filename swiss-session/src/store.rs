//! Session store trait and the in-process implementation.

use crate::config::SessionConfig;
use crate::error::{SessionError, SessionResult};
use crate::session::Session;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::time::Duration;

/// Session store for different storage backends.
pub trait SessionStore: Send + Sync {
    /// Create and save a new session.
    ///
    /// `ttl` falls back to the store's default and is clamped to its maximum.
    fn create(&self, ttl: Option<Duration>) -> SessionResult<Session>;

    /// Get a session by ID.
    ///
    /// Returns `Ok(None)` if not found or expired.
    fn load(&self, session_id: &str) -> SessionResult<Option<Session>>;

    /// Save/update a session.
    fn save(&self, session: &Session) -> SessionResult<()>;

    /// Delete a session. Deleting an unknown ID is not an error.
    fn delete(&self, session_id: &str) -> SessionResult<()>;

    /// Check if a session exists and is valid.
    fn exists(&self, session_id: &str) -> SessionResult<bool> {
        Ok(self.load(session_id)?.is_some())
    }

    /// Get the number of live sessions.
    fn count(&self) -> SessionResult<usize>;

    /// Drop expired sessions, returning how many were removed.
    fn cleanup_expired(&self) -> SessionResult<usize>;
}

/// Sessions kept in process memory.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    sessions: RwLock<HashMap<String, Session>>,
    config: SessionConfig,
}

impl MemorySessionStore {
    pub fn new(config: SessionConfig) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            config,
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Remove every session.
    pub fn clear_all(&self) {
        self.sessions.write().clear();
    }
}

impl SessionStore for MemorySessionStore {
    fn create(&self, ttl: Option<Duration>) -> SessionResult<Session> {
        let session = Session::generate(self.config.effective_ttl(ttl));
        self.save(&session)?;
        Ok(session)
    }

    fn load(&self, session_id: &str) -> SessionResult<Option<Session>> {
        Ok(self
            .sessions
            .read()
            .get(session_id)
            .filter(|session| !session.is_expired())
            .cloned())
    }

    fn save(&self, session: &Session) -> SessionResult<()> {
        if session.id.trim().is_empty() {
            return Err(SessionError::InvalidSessionId(session.id.clone()));
        }
        self.sessions
            .write()
            .insert(session.id.clone(), session.clone());
        Ok(())
    }

    fn delete(&self, session_id: &str) -> SessionResult<()> {
        self.sessions.write().remove(session_id);
        Ok(())
    }

    fn count(&self) -> SessionResult<usize> {
        Ok(self
            .sessions
            .read()
            .values()
            .filter(|session| !session.is_expired())
            .count())
    }

    fn cleanup_expired(&self) -> SessionResult<usize> {
        let mut sessions = self.sessions.write();
        let before = sessions.len();
        sessions.retain(|_, session| !session.is_expired());
        let removed = before - sessions.len();
        if removed > 0 {
            swiss_log::debug!("removed {} expired session(s)", removed);
        }
        Ok(removed)
    }
}
