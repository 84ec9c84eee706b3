//! Business services containing domain logic and use cases.

pub mod auth;
pub mod headers;
pub mod password;
pub mod token;

// Re-export commonly used types
pub use auth::AuthService;
pub use headers::{extract_api_key, extract_bearer};
pub use password::{hash_password, verify_password};
pub use token::{
    generate_refresh_token, issue_access_token, validate_access_token, RefreshTokenService,
};
