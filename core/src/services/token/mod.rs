//! Token services
//!
//! This module handles all token-related operations:
//! - JWT access token issuance and validation (stateless)
//! - Opaque refresh token generation
//! - Refresh token lifecycle management against the store

mod access;
mod generator;
mod service;

#[cfg(test)]
mod tests;

pub use access::{issue_access_token, validate_access_token};
pub use generator::{generate_refresh_token, REFRESH_TOKEN_BYTES};
pub use service::RefreshTokenService;
