//! Session-related types.

use serde::{Deserialize, Serialize};

use super::user::PublicUser;

/// The active identity held by a session store.
///
/// Present only while both the user record and the token are persisted.
/// The token is opaque and never validated - this is a client-local notion
/// of "who is using this profile", not a server-verified credential.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionIdentity {
    /// The logged-in user, fingerprint-stripped.
    pub user: PublicUser,
    /// Opaque session token.
    pub token: String,
}
