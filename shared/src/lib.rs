//! Shared configuration types for the Gatehouse server
//!
//! This crate provides the configuration types consumed by the other
//! server modules:
//! - JWT signing configuration
//! - Database connection configuration

pub mod config;

// Re-export commonly used items at crate root
pub use config::{DatabaseConfig, JwtConfig};
