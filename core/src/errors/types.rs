//! Domain-specific error types for authentication and token operations
//!
//! This module provides error type definitions for credential verification,
//! token management, and authorization-header parsing. The actual response
//! wording is decided in the presentation layer; these types carry enough
//! detail for logging without ever echoing secrets.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Authentication-related errors
///
/// These errors represent credential and authorization-header failure
/// scenarios. All of them are surfaced to clients as a generic
/// "unauthorized" response (see `DomainError::is_authentication_failure`).
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Malformed password hash")]
    MalformedHash,

    #[error("Password hashing failed")]
    HashingFailed,

    #[error("Authorization header missing")]
    MissingAuthorizationHeader,

    #[error("Credential is empty")]
    EmptyCredential,

    #[error("Unsupported authorization scheme")]
    UnsupportedScheme,

    #[error("User not found")]
    UserNotFound,

    #[error("Email already registered")]
    EmailAlreadyRegistered,
}

/// Token-related errors
///
/// These errors represent access-token validation and refresh-token
/// lifecycle failures.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token format")]
    InvalidTokenFormat,

    #[error("Invalid signature")]
    InvalidSignature,

    #[error("Token subject is not a valid identity")]
    InvalidSubject,

    #[error("Token revoked")]
    TokenRevoked,

    #[error("Token not found")]
    TokenNotFound,

    #[error("Token generation failed")]
    TokenGenerationFailed,

    #[error("Secure random source unavailable")]
    EntropyUnavailable,
}

/// Unified error response structure for API responses
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub error: String,
    /// Human-readable error message
    pub message: String,
    /// Timestamp when the error occurred
    pub timestamp: DateTime<Utc>,
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(error: impl ToString, message: impl ToString) -> Self {
        Self {
            error: error.to_string(),
            message: message.to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Convert AuthError to ErrorResponse
impl From<AuthError> for ErrorResponse {
    fn from(err: AuthError) -> Self {
        let error_code = match &err {
            AuthError::InvalidCredentials => "INVALID_CREDENTIALS",
            AuthError::MalformedHash => "MALFORMED_HASH",
            AuthError::HashingFailed => "HASHING_FAILED",
            AuthError::MissingAuthorizationHeader => "MISSING_AUTHORIZATION_HEADER",
            AuthError::EmptyCredential => "EMPTY_CREDENTIAL",
            AuthError::UnsupportedScheme => "UNSUPPORTED_SCHEME",
            AuthError::UserNotFound => "USER_NOT_FOUND",
            AuthError::EmailAlreadyRegistered => "EMAIL_ALREADY_REGISTERED",
        };

        ErrorResponse::new(error_code, err.to_string())
    }
}

/// Convert TokenError to ErrorResponse
impl From<TokenError> for ErrorResponse {
    fn from(err: TokenError) -> Self {
        let error_code = match &err {
            TokenError::TokenExpired => "TOKEN_EXPIRED",
            TokenError::InvalidTokenFormat => "INVALID_TOKEN_FORMAT",
            TokenError::InvalidSignature => "INVALID_SIGNATURE",
            TokenError::InvalidSubject => "INVALID_SUBJECT",
            TokenError::TokenRevoked => "TOKEN_REVOKED",
            TokenError::TokenNotFound => "TOKEN_NOT_FOUND",
            TokenError::TokenGenerationFailed => "TOKEN_GENERATION_FAILED",
            TokenError::EntropyUnavailable => "ENTROPY_UNAVAILABLE",
        };

        ErrorResponse::new(error_code, err.to_string())
    }
}

/// Convert DomainError to ErrorResponse
///
/// Authentication failures collapse into one generic code so the response
/// never reveals which specific check failed; storage failures collapse
/// into a service-unavailable code.
impl From<super::DomainError> for ErrorResponse {
    fn from(err: super::DomainError) -> Self {
        use super::DomainError;

        if err.is_authentication_failure() {
            return ErrorResponse::new("UNAUTHORIZED", "Authentication failed");
        }
        if err.is_service_unavailable() {
            return ErrorResponse::new("SERVICE_UNAVAILABLE", "Service temporarily unavailable");
        }

        match err {
            DomainError::Validation { message } => ErrorResponse::new("VALIDATION_ERROR", message),
            DomainError::Internal { .. } => ErrorResponse::new("INTERNAL_ERROR", "Internal error"),
            DomainError::Auth(e) => e.into(),
            DomainError::Token(e) => e.into(),
            DomainError::Database { .. } => unreachable!("handled by is_service_unavailable"),
        }
    }
}
