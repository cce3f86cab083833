//! Key-value storage capability.
//!
//! All persistence in Marquee goes through the [`KeyValue`] trait: string
//! keys mapped to JSON-serialized text values, with whole-value
//! read-modify-write as the only access pattern. The trait exists so the
//! directory, session, and favorites layers can run against an in-memory
//! fake in tests and a file-backed map in the application, without either
//! knowing which it got.
//!
//! There is no locking beyond each store's own mutex and no transactions;
//! two handles over the same backing file can race and silently overwrite
//! each other. That is an accepted limitation of the design, not something
//! this layer tries to fix.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use thiserror::Error;

/// Errors that can occur in a storage backend.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Underlying I/O failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serializing the backing map failed.
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// String-keyed storage with get/set/remove.
///
/// Values are opaque text to this layer; callers serialize and deserialize
/// their own collections.
pub trait KeyValue: Send + Sync {
    /// Read the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any prior value.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the backend cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove the value stored under `key`. Removing an absent key is a
    /// no-op.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the backend cannot be written.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Storage keys used by the persistence layer.
pub mod keys {
    use marquee_core::UserId;

    /// Key for the full user directory (array of records with fingerprints).
    pub const USERS: &str = "marquee_users";

    /// Key for the active session's public user record.
    pub const SESSION_USER: &str = "marquee_user";

    /// Key for the active session's token.
    pub const SESSION_TOKEN: &str = "marquee_token";

    /// Key for one user's favorites array.
    #[must_use]
    pub fn favorites(user_id: &UserId) -> String {
        format!("marquee_favorites_{user_id}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use marquee_core::UserId;

    #[test]
    fn test_favorites_key_is_namespaced_per_user() {
        let alice = UserId::new("user_1_aaaaaaaaa".to_owned());
        let bob = UserId::new("user_2_bbbbbbbbb".to_owned());
        assert_eq!(keys::favorites(&alice), "marquee_favorites_user_1_aaaaaaaaa");
        assert_ne!(keys::favorites(&alice), keys::favorites(&bob));
    }
}
