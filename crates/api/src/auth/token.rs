//! Opaque session-token generation and hashing.
//!
//! Tokens are random UUID v4 strings; only their SHA-256 hex digest is
//! stored server-side so a database leak does not compromise active
//! sessions.

use sha2::{Digest, Sha256};
use uuid::Uuid;

/// Generate a cryptographically random session token.
///
/// Returns a tuple of `(plaintext_token, sha256_hex_hash)`. The plaintext
/// is sent to the client exactly once; only the hash is persisted.
pub fn generate_session_token() -> (String, String) {
    let plaintext = Uuid::new_v4().to_string();
    let hash = hash_session_token(&plaintext);
    (plaintext, hash)
}

/// Compute the SHA-256 hex digest of a session token.
///
/// Use this to compare an incoming token against the stored hash.
pub fn hash_session_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    format!("{:x}", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_is_stable_for_same_token() {
        let (plaintext, hash) = generate_session_token();
        assert_eq!(hash, hash_session_token(&plaintext));
        assert_eq!(hash.len(), 64, "SHA-256 hex digest is 64 chars");
    }

    #[test]
    fn tokens_are_unique() {
        let (a, _) = generate_session_token();
        let (b, _) = generate_session_token();
        assert_ne!(a, b);
    }
}
