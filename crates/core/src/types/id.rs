//! Newtype IDs for type-safe entity references.
//!
//! Wrapping raw ids prevents accidentally mixing identifiers from different
//! entity types (a user id is never a movie id).

use core::fmt;

use chrono::Utc;
use rand::{Rng, distr::Alphanumeric};
use serde::{Deserialize, Serialize};

/// Length of the random suffix appended to generated user ids.
const USER_ID_SUFFIX_LEN: usize = 9;

/// A user identifier.
///
/// Generated ids have the form `user_{unix_millis}_{random suffix}`. The
/// timestamp plus a short random suffix gives practical uniqueness for the
/// expected directory size, not a global guarantee.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    /// Wrap an existing id value.
    #[must_use]
    pub const fn new(id: String) -> Self {
        Self(id)
    }

    /// Generate a fresh id from the current time and a random suffix.
    #[must_use]
    pub fn generate() -> Self {
        let suffix: String = rand::rng()
            .sample_iter(Alphanumeric)
            .take(USER_ID_SUFFIX_LEN)
            .map(char::from)
            .collect();

        Self(format!("user_{}_{suffix}", Utc::now().timestamp_millis()))
    }

    /// Get the underlying id string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for UserId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<UserId> for String {
    fn from(id: UserId) -> Self {
        id.0
    }
}

/// A movie identifier assigned by the external catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MovieId(u64);

impl MovieId {
    /// Create a movie id from its numeric value.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the underlying numeric value.
    #[must_use]
    pub const fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for MovieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for MovieId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl From<MovieId> for u64 {
    fn from(id: MovieId) -> Self {
        id.0
    }
}
