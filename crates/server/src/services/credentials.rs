//! Password fingerprints and session tokens.
//!
//! Both primitives here are functional placeholders, kept for compatibility
//! with the existing stored data format. The fingerprint is a 32-bit
//! accumulator - deterministic and collision-tolerant but in no way
//! collision-resistant - and the token is plain encoded text, trivially
//! forgeable, with no expiry or revocation. A production credential scheme
//! would substitute a vetted password hash (argon2) and signed, expiring
//! tokens; neither is attempted here so the stored contract stays exact.

use base64::{Engine as _, engine::general_purpose::STANDARD};
use chrono::Utc;

use marquee_core::UserId;

/// Derive the fingerprint of a plaintext password.
///
/// Same input always yields the same output; different inputs usually
/// differ. The accumulator is `h = (h << 5) - h + unit` over the UTF-16
/// units of the input, wrapping at 32 bits, rendered in decimal (possibly
/// negative).
#[must_use]
pub fn fingerprint(password: &str) -> String {
    let mut hash: i32 = 0;
    for unit in password.encode_utf16() {
        hash = hash
            .wrapping_shl(5)
            .wrapping_sub(hash)
            .wrapping_add(i32::from(unit));
    }
    hash.to_string()
}

/// Issue an opaque session token for a user.
///
/// Encodes `{user_id}:{unix_millis}` as base64 and strips everything
/// outside `[A-Za-z0-9]` so the result is storage-safe anywhere.
#[must_use]
pub fn issue_token(user_id: &UserId) -> String {
    let raw = format!("{user_id}:{}", Utc::now().timestamp_millis());
    STANDARD
        .encode(raw)
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .collect()
}
