//! Domain-specific error types and error handling.

mod types;

// Re-export all error types and utilities
pub use types::{AuthError, ErrorResponse, TokenError};

use thiserror::Error;

/// Core domain errors (general purpose)
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Storage error: {message}")]
    Database { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Token(#[from] TokenError),
}

impl DomainError {
    /// Whether this error is an authentication failure.
    ///
    /// The HTTP layer maps every error in this class to a single generic
    /// "unauthorized" response so that a client can never learn which
    /// specific check failed.
    pub fn is_authentication_failure(&self) -> bool {
        match self {
            DomainError::Auth(e) => matches!(
                e,
                AuthError::InvalidCredentials
                    | AuthError::MalformedHash
                    | AuthError::MissingAuthorizationHeader
                    | AuthError::EmptyCredential
                    | AuthError::UnsupportedScheme
                    | AuthError::UserNotFound
            ),
            DomainError::Token(e) => matches!(
                e,
                TokenError::TokenExpired
                    | TokenError::InvalidSignature
                    | TokenError::InvalidTokenFormat
                    | TokenError::InvalidSubject
                    | TokenError::TokenRevoked
                    | TokenError::TokenNotFound
            ),
            _ => false,
        }
    }

    /// Whether this error means the storage collaborator is unavailable.
    ///
    /// These map to a "service unavailable" response class, distinct from
    /// authentication failures.
    pub fn is_service_unavailable(&self) -> bool {
        matches!(self, DomainError::Database { .. })
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
