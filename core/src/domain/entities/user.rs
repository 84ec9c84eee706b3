//! User entity representing a registered account in the Gatehouse system.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User entity representing a registered account
///
/// The `password_hash` is a bcrypt-encoded string carrying its own salt
/// and cost; it is never decoded back to a plaintext password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user
    pub id: Uuid,

    /// Email address used to log in
    pub email: String,

    /// Encoded credential hash
    pub password_hash: String,

    /// Timestamp when the user was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the user was last updated
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Creates a new User instance with a freshly generated identity
    pub fn new(email: String, password_hash: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            email,
            password_hash,
            created_at: now,
            updated_at: now,
        }
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_creation() {
        let user = User::new("user@example.com".to_string(), "$2b$10$hash".to_string());

        assert_eq!(user.email, "user@example.com");
        assert_eq!(user.password_hash, "$2b$10$hash");
        assert_eq!(user.created_at, user.updated_at);
    }

    #[test]
    fn test_users_get_distinct_identities() {
        let a = User::new("a@example.com".to_string(), "hash".to_string());
        let b = User::new("b@example.com".to_string(), "hash".to_string());

        assert_ne!(a.id, b.id);
    }
}
