//! Session store: the active identity for one storage handle.
//!
//! One store holds at most one identity, last write wins. This is an
//! explicit value rather than ambient global state so tests (and anything
//! simulating several profiles) can hold several stores side by side
//! without interference.

use std::sync::Arc;

use thiserror::Error;

use crate::models::session::SessionIdentity;
use crate::models::user::PublicUser;
use crate::storage::{KeyValue, StorageError, keys};

/// Errors from session mutations.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Storage backend failure.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// The user record could not be serialized.
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Holds the currently logged-in user's public record and token.
#[derive(Clone)]
pub struct SessionStore {
    storage: Arc<dyn KeyValue>,
}

impl SessionStore {
    /// Create a session store over a storage handle.
    #[must_use]
    pub fn new(storage: Arc<dyn KeyValue>) -> Self {
        Self { storage }
    }

    /// Persist `user` and `token` as the active identity, replacing any
    /// prior one.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError`] if either value cannot be persisted.
    pub fn establish(&self, user: &PublicUser, token: &str) -> Result<(), SessionError> {
        let user_json = serde_json::to_string(user)?;
        self.storage.set(keys::SESSION_USER, &user_json)?;
        self.storage.set(keys::SESSION_TOKEN, token)?;

        tracing::debug!(user_id = %user.id, "session established");
        Ok(())
    }

    /// Remove the active identity.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError`] if the backend cannot be written.
    pub fn clear(&self) -> Result<(), SessionError> {
        self.storage.remove(keys::SESSION_USER)?;
        self.storage.remove(keys::SESSION_TOKEN)?;

        tracing::debug!("session cleared");
        Ok(())
    }

    /// The active identity, if both user and token are persisted.
    ///
    /// No token validation of any kind is performed. A corrupt stored user
    /// record reads as "no session".
    #[must_use]
    pub fn current(&self) -> Option<SessionIdentity> {
        let user_json = self.storage.get(keys::SESSION_USER).ok().flatten()?;
        let token = self.storage.get(keys::SESSION_TOKEN).ok().flatten()?;

        let user: PublicUser = match serde_json::from_str(&user_json) {
            Ok(user) => user,
            Err(error) => {
                tracing::warn!(%error, "stored session user is malformed, treating as logged out");
                return None;
            }
        };

        Some(SessionIdentity { user, token })
    }

    /// Whether an identity is currently present.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.current().is_some()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use chrono::Utc;
    use marquee_core::{Email, UserId};

    fn user(id: &str) -> PublicUser {
        PublicUser {
            id: UserId::new(id.to_owned()),
            email: Email::parse("alice@example.com").unwrap(),
            name: "Alice".to_owned(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_establish_then_current() {
        let store = SessionStore::new(Arc::new(MemoryStore::new()));
        assert!(store.current().is_none());
        assert!(!store.is_authenticated());

        store.establish(&user("user_1_aaaaaaaaa"), "tok").unwrap();

        let identity = store.current().unwrap();
        assert_eq!(identity.user.id, UserId::new("user_1_aaaaaaaaa".to_owned()));
        assert_eq!(identity.token, "tok");
        assert!(store.is_authenticated());
    }

    #[test]
    fn test_establish_replaces_prior_identity() {
        let store = SessionStore::new(Arc::new(MemoryStore::new()));
        store.establish(&user("user_1_aaaaaaaaa"), "tok1").unwrap();
        store.establish(&user("user_2_bbbbbbbbb"), "tok2").unwrap();

        let identity = store.current().unwrap();
        assert_eq!(identity.user.id, UserId::new("user_2_bbbbbbbbb".to_owned()));
        assert_eq!(identity.token, "tok2");
    }

    #[test]
    fn test_clear_removes_identity() {
        let store = SessionStore::new(Arc::new(MemoryStore::new()));
        store.establish(&user("user_1_aaaaaaaaa"), "tok").unwrap();
        store.clear().unwrap();

        assert!(store.current().is_none());
    }

    #[test]
    fn test_token_without_user_is_no_session() {
        let storage = Arc::new(MemoryStore::new());
        storage.set(keys::SESSION_TOKEN, "tok").unwrap();

        let store = SessionStore::new(storage);
        assert!(store.current().is_none());
    }

    #[test]
    fn test_corrupt_user_record_is_no_session() {
        let storage = Arc::new(MemoryStore::new());
        storage.set(keys::SESSION_USER, "{broken").unwrap();
        storage.set(keys::SESSION_TOKEN, "tok").unwrap();

        let store = SessionStore::new(storage);
        assert!(store.current().is_none());
        assert!(!store.is_authenticated());
    }

    #[test]
    fn test_stores_over_different_storage_are_independent() {
        let a = SessionStore::new(Arc::new(MemoryStore::new()));
        let b = SessionStore::new(Arc::new(MemoryStore::new()));

        a.establish(&user("user_1_aaaaaaaaa"), "tok").unwrap();
        assert!(a.is_authenticated());
        assert!(!b.is_authenticated());
    }
}
