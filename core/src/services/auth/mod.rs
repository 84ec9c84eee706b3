//! Authentication service module
//!
//! Orchestrates the credential and token components into the login,
//! refresh and logout flows consumed by the HTTP layer.

mod service;


pub use service::AuthService;
