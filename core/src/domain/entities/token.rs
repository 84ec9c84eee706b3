//! Token entities for JWT-based authentication.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Default access token expiration time (1 hour)
pub const ACCESS_TOKEN_EXPIRY_MINUTES: i64 = 60;

/// Refresh token expiration time (60 days)
pub const REFRESH_TOKEN_EXPIRY_DAYS: i64 = 60;

/// JWT issuer
pub const JWT_ISSUER: &str = "gatehouse";

/// Claims structure for JWT payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,

    /// Issuer
    pub iss: String,
}

impl Claims {
    /// Creates new claims for an access token
    ///
    /// `exp` is always strictly after `iat` by `lifetime`; the subject is
    /// the string form of the user's identity.
    pub fn new(user_id: Uuid, lifetime: Duration) -> Self {
        let now = Utc::now();
        let expiry = now + lifetime;

        Self {
            sub: user_id.to_string(),
            iat: now.timestamp(),
            exp: expiry.timestamp(),
            iss: JWT_ISSUER.to_string(),
        }
    }

    /// Checks if the claims have expired
    pub fn is_expired(&self) -> bool {
        let now = Utc::now().timestamp();
        now >= self.exp
    }

    /// Gets the user ID from the claims
    pub fn user_id(&self) -> Result<Uuid, uuid::Error> {
        Uuid::parse_str(&self.sub)
    }
}

/// Refresh token entity stored in the database
///
/// An opaque random value bound to exactly one user. Once `revoked_at` is
/// set it is never cleared; the token stays invalid regardless of expiry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshToken {
    /// Opaque token value (64 hex characters), unique across the store
    pub token: String,

    /// User ID this token belongs to
    pub user_id: Uuid,

    /// Timestamp when the token was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the token was last updated
    pub updated_at: DateTime<Utc>,

    /// Timestamp when the token expires
    pub expires_at: DateTime<Utc>,

    /// Timestamp when the token was revoked, if it has been
    pub revoked_at: Option<DateTime<Utc>>,
}

impl RefreshToken {
    /// Creates a new refresh token bound to a user
    ///
    /// The lifetime comes from the caller's configuration; there is no
    /// hardcoded fallback here.
    pub fn new(user_id: Uuid, token: String, lifetime: Duration) -> Self {
        let now = Utc::now();
        let expires_at = now + lifetime;

        Self {
            token,
            user_id,
            created_at: now,
            updated_at: now,
            expires_at,
            revoked_at: None,
        }
    }

    /// Checks if the refresh token has expired
    pub fn is_expired(&self) -> bool {
        Utc::now() >= self.expires_at
    }

    /// Checks if the refresh token has been revoked
    pub fn is_revoked(&self) -> bool {
        self.revoked_at.is_some()
    }

    /// Checks if the refresh token is usable (neither expired nor revoked)
    pub fn is_usable(&self) -> bool {
        !self.is_expired() && !self.is_revoked()
    }

    /// Revokes the refresh token
    ///
    /// Idempotent: an already-revoked token keeps its original
    /// `revoked_at` timestamp.
    pub fn revoke(&mut self) {
        if self.revoked_at.is_none() {
            let now = Utc::now();
            self.revoked_at = Some(now);
            self.updated_at = now;
        }
    }
}

/// Token pair returned to the client after a successful login
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    /// JWT access token
    pub access_token: String,

    /// Opaque refresh token value
    pub refresh_token: String,

    /// Access token expiry time in seconds
    pub access_expires_in: i64,
}

impl TokenPair {
    /// Creates a new token pair
    pub fn new(access_token: String, refresh_token: String, access_lifetime: Duration) -> Self {
        Self {
            access_token,
            refresh_token,
            access_expires_in: access_lifetime.num_seconds(),
        }
    }
}
