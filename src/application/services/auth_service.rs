//! Authentication service for the shared bearer token.

use std::sync::Arc;

use crate::domain::repositories::TokenRepository;
use crate::error::AppError;
use crate::utils::code_generator::generate_token;

/// Service for checking and provisioning the authorization token.
///
/// A presented token is valid iff it equals a stored token value. The
/// comparison is plain string equality and not constant-time.
pub struct AuthService {
    repository: Arc<dyn TokenRepository>,
}

impl AuthService {
    /// Creates a new authentication service.
    pub fn new(repository: Arc<dyn TokenRepository>) -> Self {
        Self { repository }
    }

    /// Returns `true` iff a stored token equals `token`.
    ///
    /// Never fails: a missing row and a database error both yield `false`,
    /// and both are logged.
    pub async fn validate_token(&self, token: &str) -> bool {
        match self.repository.find_by_key(token).await {
            Ok(Some(stored)) => stored.key == token,
            Ok(None) => {
                tracing::warn!("Presented authorization token does not match any stored token");
                false
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to look up authorization token");
                false
            }
        }
    }

    /// Authenticates a raw bearer token.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if the token is not valid. Storage
    /// failures are folded into the same outcome.
    pub async fn authenticate(&self, token: &str) -> Result<(), AppError> {
        if self.validate_token(token).await {
            Ok(())
        } else {
            Err(AppError::Unauthorized)
        }
    }

    /// Creates a token if the store has none.
    ///
    /// Returns `Some(token)` when a new token was generated so the caller can
    /// show it to the operator, or `None` if one was already provisioned.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store cannot be read or written.
    pub async fn provision_default_token(&self) -> Result<Option<String>, AppError> {
        if let Some(existing) = self.repository.first().await? {
            tracing::debug!(id = existing.id, "Authorization token already provisioned");
            return Ok(None);
        }

        let token = self.repository.create(&generate_token()).await?;
        tracing::info!(id = token.id, "Provisioned default authorization token");

        Ok(Some(token.key))
    }
}
