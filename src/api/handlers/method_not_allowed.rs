//! Fallback for unsupported methods on a known route.

use axum::http::Method;

use crate::error::AppError;

/// Rejects the request with `405 Method not supported`.
pub async fn method_not_allowed_handler(method: Method) -> AppError {
    tracing::debug!(%method, "Method not supported");
    AppError::MethodNotAllowed
}
