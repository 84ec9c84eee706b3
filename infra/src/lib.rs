//! # Infrastructure Layer
//!
//! MySQL persistence for the Gatehouse backend. This crate provides the
//! concrete implementations of the core's repository traits:
//!
//! - **Database**: connection-pool management over SQLx
//! - **Repositories**: `MySqlUserRepository`, `MySqlTokenRepository`

// Re-export core error types for convenience
pub use gatehouse_core::errors::*;

/// Database module - MySQL implementations using SQLx
pub mod database;

/// Load environment configuration for the database layer
///
/// Reads `.env` if present, then the `DATABASE_*` variables.
pub fn load_database_config() -> gatehouse_shared::DatabaseConfig {
    dotenvy::dotenv().ok();
    gatehouse_shared::DatabaseConfig::from_env()
}
