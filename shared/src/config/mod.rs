//! Configuration modules

pub mod auth;
pub mod database;

pub use auth::JwtConfig;
pub use database::DatabaseConfig;
