//! Credential hashing and verification.
//!
//! Passwords are hashed with bcrypt at a fixed cost. The encoded hash
//! string carries the algorithm tag, cost and salt, so verification needs
//! no extra stored state. Plaintext passwords are never logged.

use crate::errors::{AuthError, DomainResult};

/// bcrypt work factor for new hashes
pub const HASH_COST: u32 = 10;

/// Hash a plaintext password with a fresh random salt
///
/// Fails only on entropy-source exhaustion or an internal bcrypt error.
pub fn hash_password(password: &str) -> DomainResult<String> {
    bcrypt::hash(password, HASH_COST).map_err(|e| {
        tracing::error!("password hashing failed: {}", e);
        AuthError::HashingFailed.into()
    })
}

/// Verify a plaintext password against a stored bcrypt hash
///
/// Recomputes the transform using the salt and cost embedded in `hash` and
/// compares digests in constant time. A mismatch and a malformed hash are
/// distinct errors for logging; both classify as generic authentication
/// failures toward the client.
pub fn verify_password(hash: &str, password: &str) -> DomainResult<()> {
    match bcrypt::verify(password, hash) {
        Ok(true) => Ok(()),
        Ok(false) => Err(AuthError::InvalidCredentials.into()),
        Err(e) => {
            tracing::warn!("stored password hash is malformed: {}", e);
            Err(AuthError::MalformedHash.into())
        }
    }
}
