//! Link creation and expansion service.

use std::sync::Arc;

use axum::http::uri::PathAndQuery;

use crate::domain::entities::{NewLink, ShortUrl};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::generate_code;

/// Service for creating and resolving short links.
pub struct LinkService {
    repository: Arc<dyn LinkRepository>,
    base_url: String,
}

impl LinkService {
    /// Creates a new link service.
    ///
    /// `base_url` is the public prefix of returned short URLs; a trailing `/`
    /// is dropped.
    pub fn new(repository: Arc<dyn LinkRepository>, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            repository,
            base_url,
        }
    }

    /// Stores `long_url` under a freshly generated code and returns the full short URL.
    ///
    /// The URL is stored verbatim; validating it is the caller's job.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the insert fails, including the
    /// unlikely case of a code collision.
    pub async fn shorten(&self, long_url: &str) -> Result<ShortUrl, AppError> {
        let new_link = NewLink {
            code: generate_code(),
            long_url: long_url.to_string(),
        };

        let link = self.repository.create(new_link).await?;
        tracing::debug!(code = %link.code, "Link stored");

        Ok(self.short_url(&link.code))
    }

    /// Resolves a request path such as `/abc123` to the original URL.
    ///
    /// Every `/` in the path is removed before the lookup, so `/ab/c` looks up
    /// `abc`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the path is not a well-formed URI path
    /// or no link matches. Returns [`AppError::Internal`] on database errors.
    pub async fn expand(&self, short_path: &str) -> Result<String, AppError> {
        let path = PathAndQuery::try_from(short_path)
            .ok()
            .filter(|p| p.path().starts_with('/'))
            .ok_or_else(|| AppError::not_found("Malformed short path", short_path))?;

        let code = path.path().replace('/', "");

        self.repository
            .find_by_code(&code)
            .await?
            .map(|link| link.long_url)
            .ok_or_else(|| AppError::not_found("Short link not found", code))
    }

    /// Builds the full short URL for a code.
    pub fn short_url(&self, code: &str) -> ShortUrl {
        ShortUrl::new(&self.base_url, code)
    }
}
