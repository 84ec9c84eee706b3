//! Token repository trait defining the interface for refresh token persistence.

use async_trait::async_trait;

use crate::domain::entities::token::RefreshToken;
use crate::errors::DomainError;

/// Repository trait for RefreshToken entity persistence operations
///
/// This trait defines the contract for managing refresh tokens in the
/// store. Tokens are keyed by their exact opaque value; the 256-bit
/// generation scheme makes collisions practically impossible, but
/// implementations must still reject an insert whose value already exists.
///
/// Consistency (value uniqueness, atomic revocation) is delegated to the
/// implementation's transactional guarantees; `insert` and `revoke` are
/// expected to be atomic single-row operations.
#[async_trait]
pub trait TokenRepository: Send + Sync {
    /// Persist a new refresh token row
    ///
    /// # Returns
    /// * `Ok(RefreshToken)` - The saved token
    /// * `Err(DomainError::Validation)` - A row with the same value exists
    /// * `Err(DomainError::Database)` - The store is unavailable
    async fn insert(&self, token: RefreshToken) -> Result<RefreshToken, DomainError>;

    /// Find a refresh token by its exact value
    ///
    /// # Returns
    /// * `Ok(Some(RefreshToken))` - Token found
    /// * `Ok(None)` - No token with the given value
    /// * `Err(DomainError::Database)` - The store is unavailable
    async fn find_by_value(&self, value: &str) -> Result<Option<RefreshToken>, DomainError>;

    /// Mark an active refresh token revoked
    ///
    /// Sets `revoked_at` and `updated_at` to now for the row with the given
    /// value, provided it has not been revoked already. `revoked_at` is
    /// never cleared or overwritten.
    ///
    /// # Returns
    /// * `Ok(true)` - An active row was revoked
    /// * `Ok(false)` - No active row matched (absent or already revoked)
    /// * `Err(DomainError::Database)` - The store is unavailable
    async fn revoke(&self, value: &str) -> Result<bool, DomainError>;

    /// Delete expired refresh tokens from the store
    ///
    /// Housekeeping; called periodically by the operator, never as part of
    /// a request path.
    ///
    /// # Returns
    /// * `Ok(usize)` - Number of rows deleted
    /// * `Err(DomainError::Database)` - The store is unavailable
    async fn delete_expired(&self) -> Result<usize, DomainError>;
}
