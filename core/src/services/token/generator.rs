//! Opaque refresh token generation.

use rand::rngs::OsRng;
use rand::RngCore;

use crate::errors::{DomainResult, TokenError};

/// Bytes of entropy per refresh token (256 bits)
///
/// Enough that brute-force guessing and birthday collisions are both
/// practically impossible, so no uniqueness check against the store is
/// required before first use.
pub const REFRESH_TOKEN_BYTES: usize = 32;

/// Generate an unguessable refresh token value
///
/// Draws 256 bits from the OS CSPRNG and encodes them as a fixed-length
/// hexadecimal string. A failing random source is surfaced as an error,
/// never silently retried with a weaker source.
pub fn generate_refresh_token() -> DomainResult<String> {
    let mut buffer = [0u8; REFRESH_TOKEN_BYTES];

    OsRng.try_fill_bytes(&mut buffer).map_err(|e| {
        tracing::error!("secure random source failed: {}", e);
        TokenError::EntropyUnavailable
    })?;

    Ok(hex::encode(buffer))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_token_is_fixed_length_hex() {
        let token = generate_refresh_token().unwrap();

        assert_eq!(token.len(), REFRESH_TOKEN_BYTES * 2);
        assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_tokens_never_repeat() {
        let mut seen = HashSet::new();

        for _ in 0..1000 {
            let token = generate_refresh_token().unwrap();
            assert!(seen.insert(token), "generator produced a duplicate value");
        }
    }
}
