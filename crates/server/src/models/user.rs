//! User domain types.
//!
//! [`UserRecord`] is the directory-internal shape and carries the password
//! fingerprint; [`PublicUser`] is the same record with the fingerprint
//! stripped and is the only shape that crosses the directory boundary.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use marquee_core::{Email, UserId};

/// A directory entry, including the password fingerprint.
///
/// Created on registration and immutable thereafter; there is no update
/// path. Never hand one of these to a caller - use [`UserRecord::to_public`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Generated unique id.
    pub id: UserId,
    /// Email address, stored lowercased.
    pub email: Email,
    /// Display name.
    pub name: String,
    /// Non-cryptographic password fingerprint.
    pub password_fingerprint: String,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
}

impl UserRecord {
    /// The record with the fingerprint stripped.
    #[must_use]
    pub fn to_public(&self) -> PublicUser {
        PublicUser {
            id: self.id.clone(),
            email: self.email.clone(),
            name: self.name.clone(),
            created_at: self.created_at,
        }
    }
}

/// A user record as exposed outside the directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicUser {
    /// Generated unique id.
    pub id: UserId,
    /// Email address, lowercased.
    pub email: Email,
    /// Display name.
    pub name: String,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_to_public_strips_fingerprint() {
        let record = UserRecord {
            id: UserId::new("user_1_abcdefghi".to_owned()),
            email: Email::parse("alice@example.com").unwrap(),
            name: "Alice".to_owned(),
            password_fingerprint: "12345".to_owned(),
            created_at: Utc::now(),
        };

        let public = record.to_public();
        assert_eq!(public.id, record.id);
        assert_eq!(public.email, record.email);

        let json = serde_json::to_string(&public).unwrap();
        assert!(!json.contains("12345"));
        assert!(!json.contains("fingerprint"));
    }
}
