//! Stateless access token codec.
//!
//! Access tokens are self-contained HS256 JWTs asserting
//! {issuer, subject, issued-at, expires-at}. Validity is determined purely
//! by signature and expiry at validation time; no store is consulted, so
//! any server instance can validate without a shared cache. The trade-off:
//! an access token cannot be invalidated server-side before its natural
//! expiry. Revocation only affects refresh tokens.

use chrono::Duration;
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use uuid::Uuid;

use crate::domain::entities::token::{Claims, JWT_ISSUER};
use crate::errors::{DomainResult, TokenError};

/// Issue a signed access token for a user
///
/// The secret and lifetime come from the caller on every call; the codec
/// holds no configuration state of its own.
pub fn issue_access_token(user_id: Uuid, secret: &str, lifetime: Duration) -> DomainResult<String> {
    let claims = Claims::new(user_id, lifetime);

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| {
        tracing::error!("access token signing failed: {}", e);
        TokenError::TokenGenerationFailed.into()
    })
}

/// Validate an access token and extract the subject identity
///
/// Rejects on invalid signature, malformed token, wrong issuer, expiry, or
/// a subject that does not parse as an identity. Expiry is re-checked
/// explicitly after library validation.
pub fn validate_access_token(token: &str, secret: &str) -> DomainResult<Uuid> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.set_issuer(&[JWT_ISSUER]);
    validation.validate_exp = true;
    validation.leeway = 0;

    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map_err(|e| match e.kind() {
        ErrorKind::ExpiredSignature => TokenError::TokenExpired,
        ErrorKind::InvalidSignature | ErrorKind::InvalidIssuer => TokenError::InvalidSignature,
        _ => TokenError::InvalidTokenFormat,
    })?;

    let claims = token_data.claims;

    // The library already enforces exp; re-check explicitly
    if claims.is_expired() {
        return Err(TokenError::TokenExpired.into());
    }

    claims
        .user_id()
        .map_err(|_| TokenError::InvalidSubject.into())
}
