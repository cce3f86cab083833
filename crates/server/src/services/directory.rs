//! User directory over a single storage key.
//!
//! The whole directory is one JSON array under [`keys::USERS`]; every
//! operation is a read-modify-write of that array. An O(n) scan is fine at
//! the expected scale (one browser profile's worth of accounts).

use std::sync::Arc;

use thiserror::Error;

use marquee_core::{Email, UserId};

use crate::models::user::{PublicUser, UserRecord};
use crate::storage::{KeyValue, StorageError, keys};

/// Errors from directory mutations.
///
/// Read paths never error: a missing or corrupt collection reads as empty.
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// An account with this email (case-insensitive) already exists.
    #[error("an account with this email already exists")]
    AlreadyExists,

    /// Storage backend failure.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// The collection could not be serialized.
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// The email -> user record collection.
#[derive(Clone)]
pub struct UserDirectory {
    storage: Arc<dyn KeyValue>,
}

impl UserDirectory {
    /// Create a directory over a storage handle.
    #[must_use]
    pub fn new(storage: Arc<dyn KeyValue>) -> Self {
        Self { storage }
    }

    /// Load the persisted collection; missing or corrupt data reads empty.
    fn load(&self) -> Vec<UserRecord> {
        let text = match self.storage.get(keys::USERS) {
            Ok(Some(text)) => text,
            Ok(None) => return Vec::new(),
            Err(error) => {
                tracing::warn!(%error, "failed to read user directory, treating as empty");
                return Vec::new();
            }
        };

        serde_json::from_str(&text).unwrap_or_else(|error| {
            tracing::warn!(%error, "user directory is malformed, treating as empty");
            Vec::new()
        })
    }

    fn persist(&self, users: &[UserRecord]) -> Result<(), DirectoryError> {
        let text = serde_json::to_string(users)?;
        self.storage.set(keys::USERS, &text)?;
        Ok(())
    }

    /// Look up a record by email, case-insensitively.
    #[must_use]
    pub fn find_by_email(&self, email: &Email) -> Option<UserRecord> {
        self.load().into_iter().find(|u| u.email.matches(email))
    }

    /// Register a new user.
    ///
    /// The email is stored lowercased; the returned record has the
    /// fingerprint stripped.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::AlreadyExists`] if the email is taken
    /// (case-insensitive), or a storage/serialization error if the
    /// collection cannot be persisted.
    pub fn create(
        &self,
        email: &Email,
        name: &str,
        password_fingerprint: &str,
    ) -> Result<PublicUser, DirectoryError> {
        let mut users = self.load();

        if users.iter().any(|u| u.email.matches(email)) {
            return Err(DirectoryError::AlreadyExists);
        }

        let record = UserRecord {
            id: UserId::generate(),
            email: email.normalized(),
            name: name.to_owned(),
            password_fingerprint: password_fingerprint.to_owned(),
            created_at: chrono::Utc::now(),
        };

        let public = record.to_public();
        users.push(record);
        self.persist(&users)?;

        tracing::info!(user_id = %public.id, "user registered");
        Ok(public)
    }

    /// Validate a login attempt.
    ///
    /// Looks up by email and compares fingerprints byte-for-byte. Returns
    /// the fingerprint-stripped record on match, `None` otherwise. There is
    /// deliberately no rate-limiting and no lockout.
    #[must_use]
    pub fn validate(&self, email: &Email, password_fingerprint: &str) -> Option<PublicUser> {
        let record = self.find_by_email(email)?;

        if record.password_fingerprint == password_fingerprint {
            Some(record.to_public())
        } else {
            None
        }
    }
}
