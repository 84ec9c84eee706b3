//! User repository trait defining the interface for user data persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::errors::DomainError;

/// Repository trait for User entity persistence operations
///
/// Implementations handle the actual database operations while keeping the
/// abstraction boundary between domain and infrastructure layers.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persist a new user with their credential hash
    ///
    /// # Returns
    /// * `Ok(User)` - The created user
    /// * `Err(DomainError::Validation)` - The email is already registered
    /// * `Err(DomainError::Database)` - The store is unavailable
    async fn create(&self, user: User) -> Result<User, DomainError>;

    /// Find a user by their email address
    ///
    /// # Returns
    /// * `Ok(Some(User))` - User found, including the credential hash
    /// * `Ok(None)` - No user with the given email
    /// * `Err(DomainError::Database)` - The store is unavailable
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Find a user by their unique identifier
    ///
    /// # Returns
    /// * `Ok(Some(User))` - User found
    /// * `Ok(None)` - No user with the given id
    /// * `Err(DomainError::Database)` - The store is unavailable
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError>;
}
