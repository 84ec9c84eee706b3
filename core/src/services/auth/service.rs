//! Main authentication service implementation

use std::sync::Arc;

use gatehouse_shared::config::JwtConfig;

use crate::domain::entities::token::TokenPair;
use crate::domain::entities::user::User;
use crate::errors::{AuthError, DomainResult};
use crate::repositories::{TokenRepository, UserRepository};
use crate::services::password::{hash_password, verify_password};
use crate::services::token::{issue_access_token, RefreshTokenService};

/// Authentication service for the complete credential flow
///
/// Wires the hasher, the access token codec and the refresh token
/// lifecycle together. Holds no mutable state of its own; all shared
/// state lives behind the repositories.
pub struct AuthService<U, R>
where
    U: UserRepository,
    R: TokenRepository,
{
    /// User repository for account lookup and creation
    users: Arc<U>,
    /// Refresh token lifecycle manager
    refresh_tokens: RefreshTokenService<R, U>,
    /// Signing secret and token lifetimes
    config: JwtConfig,
}

impl<U, R> AuthService<U, R>
where
    U: UserRepository,
    R: TokenRepository,
{
    /// Create a new authentication service
    pub fn new(users: Arc<U>, tokens: Arc<R>, config: JwtConfig) -> Self {
        let refresh_tokens = RefreshTokenService::new(tokens, Arc::clone(&users));
        Self {
            users,
            refresh_tokens,
            config,
        }
    }

    /// Register a new account
    ///
    /// Hashes the password and persists the user. The plaintext password
    /// is dropped here and never stored or logged.
    pub async fn register(&self, email: &str, password: &str) -> DomainResult<User> {
        if self.users.find_by_email(email).await?.is_some() {
            return Err(AuthError::EmailAlreadyRegistered.into());
        }

        let password_hash = hash_password(password)?;
        let user = self
            .users
            .create(User::new(email.to_string(), password_hash))
            .await?;

        tracing::debug!(user_id = %user.id, "user registered");
        Ok(user)
    }

    /// Authenticate with email and password, minting a token pair
    ///
    /// An unknown email and a wrong password surface as the same
    /// credential error; the HTTP layer never learns which check failed.
    pub async fn login(&self, email: &str, password: &str) -> DomainResult<TokenPair> {
        let user = self
            .users
            .find_by_email(email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        verify_password(&user.password_hash, password)?;

        let lifetime = self.config.access_token_lifetime();
        let access_token = issue_access_token(user.id, &self.config.secret, lifetime)?;
        let refresh_token = self
            .refresh_tokens
            .create(user.id, self.config.refresh_token_lifetime())
            .await?;

        tracing::debug!(user_id = %user.id, "login succeeded");
        Ok(TokenPair::new(access_token, refresh_token.token, lifetime))
    }

    /// Mint a new access token from a refresh token
    ///
    /// The refresh token itself is not rotated; it stays valid until it
    /// expires or is revoked.
    pub async fn refresh(&self, refresh_token: &str) -> DomainResult<String> {
        let token = self.refresh_tokens.lookup(refresh_token).await?;
        self.refresh_tokens.check_usable(&token)?;

        let user_id = self.refresh_tokens.identity_for(&token).await?;

        issue_access_token(
            user_id,
            &self.config.secret,
            self.config.access_token_lifetime(),
        )
    }

    /// Revoke a refresh token, ending the session
    pub async fn logout(&self, refresh_token: &str) -> DomainResult<()> {
        self.refresh_tokens.revoke(refresh_token).await
    }

    /// Access the refresh token lifecycle manager directly
    pub fn refresh_tokens(&self) -> &RefreshTokenService<R, U> {
        &self.refresh_tokens
    }
}
