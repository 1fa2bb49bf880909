//! Repository trait for the authorization token store.

use crate::domain::entities::AuthorizationToken;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for authorization tokens.
///
/// Tokens are stored as-is. In practice the table holds a single row that is
/// provisioned on first startup.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteTokenRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TokenRepository: Send + Sync {
    /// Finds the token whose value equals `key`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_key(&self, key: &str) -> Result<Option<AuthorizationToken>, AppError>;

    /// Returns the oldest stored token, if any.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn first(&self) -> Result<Option<AuthorizationToken>, AppError>;

    /// Stores a new token value.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, key: &str) -> Result<AuthorizationToken, AppError>;

    /// Lists all stored tokens, oldest first.
    async fn list(&self) -> Result<Vec<AuthorizationToken>, AppError>;
}
