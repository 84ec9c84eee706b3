//! Refresh token lifecycle management.
//!
//! State machine per token: Active -> Expired (time-driven, implicit) and
//! Active -> Revoked (explicit, terminal). Neither terminal state
//! transitions back to Active. Tokens are not rotated on use: the same
//! refresh token keeps minting new access tokens until it expires or is
//! explicitly revoked.

use std::sync::Arc;

use chrono::Duration;
use uuid::Uuid;

use crate::domain::entities::token::RefreshToken;
use crate::errors::{AuthError, DomainResult, TokenError};
use crate::repositories::{TokenRepository, UserRepository};
use crate::services::token::generator::generate_refresh_token;

/// Loggable prefix of a token value; never the whole value, never a panic
/// on a short row from the store
fn log_prefix(value: &str) -> &str {
    value.get(..8).unwrap_or(value)
}

/// Service coordinating refresh token issuance, lookup and revocation
/// against the persistent store
pub struct RefreshTokenService<R, U>
where
    R: TokenRepository,
    U: UserRepository,
{
    tokens: Arc<R>,
    users: Arc<U>,
}

impl<R, U> RefreshTokenService<R, U>
where
    R: TokenRepository,
    U: UserRepository,
{
    /// Create a new refresh token service
    pub fn new(tokens: Arc<R>, users: Arc<U>) -> Self {
        Self { tokens, users }
    }

    /// Create and persist a refresh token bound to a user
    ///
    /// The lifetime comes from the caller's configuration on every call.
    pub async fn create(&self, user_id: Uuid, lifetime: Duration) -> DomainResult<RefreshToken> {
        let value = generate_refresh_token()?;
        let token = RefreshToken::new(user_id, value, lifetime);

        let saved = self.tokens.insert(token).await?;
        tracing::debug!(
            %user_id,
            token_prefix = log_prefix(&saved.token),
            "refresh token created"
        );

        Ok(saved)
    }

    /// Fetch a refresh token by its exact value
    pub async fn lookup(&self, value: &str) -> DomainResult<RefreshToken> {
        self.tokens
            .find_by_value(value)
            .await?
            .ok_or_else(|| TokenError::TokenNotFound.into())
    }

    /// Check that a refresh token is still usable
    ///
    /// Expiry is reported before revocation when both hold, so callers see
    /// a deterministic error.
    pub fn check_usable(&self, token: &RefreshToken) -> DomainResult<()> {
        if token.is_expired() {
            return Err(TokenError::TokenExpired.into());
        }
        if token.is_revoked() {
            return Err(TokenError::TokenRevoked.into());
        }
        Ok(())
    }

    /// Revoke a refresh token by value
    ///
    /// Idempotent: revoking an already-revoked token succeeds without
    /// touching the row. An unknown value is an error.
    pub async fn revoke(&self, value: &str) -> DomainResult<()> {
        let token = self.lookup(value).await?;

        if token.is_revoked() {
            tracing::debug!(token_prefix = log_prefix(&token.token), "token already revoked");
            return Ok(());
        }

        // A concurrent revoke may win the race; that still satisfies the
        // caller's intent, so the returned flag is informational only.
        let revoked = self.tokens.revoke(value).await?;
        tracing::debug!(
            token_prefix = log_prefix(&token.token),
            newly_revoked = revoked,
            "refresh token revoked"
        );

        Ok(())
    }

    /// Resolve the identity owning a refresh token
    ///
    /// Fails when the user record has been deleted out-of-band since the
    /// token was issued.
    pub async fn identity_for(&self, token: &RefreshToken) -> DomainResult<Uuid> {
        let user = self
            .users
            .find_by_id(token.user_id)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        Ok(user.id)
    }
}
