//! # Gatehouse Core
//!
//! Credential and session-token logic for the Gatehouse backend. This
//! crate contains the domain entities, business services, repository
//! interfaces and error types that form the authentication core; HTTP
//! routing and persistence live in the surrounding crates.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use repositories::*;
pub use services::*;
