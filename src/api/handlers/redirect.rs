//! Handler for short URL redirect.

use axum::{
    extract::State,
    http::{Method, Uri},
    response::Redirect,
};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// Installed as the router fallback, so it sees every path except `/c`. The
/// whole request path is handed to [`crate::application::services::LinkService::expand`].
/// Every call hits the database; nothing is cached.
///
/// # Errors
///
/// - `405 Method not supported` for anything but `GET`
/// - `500 Failed to get full url` if the code is unknown or the lookup fails
pub async fn redirect_handler(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
) -> Result<Redirect, AppError> {
    if method != Method::GET {
        tracing::debug!(%method, path = uri.path(), "Method not supported");
        return Err(AppError::MethodNotAllowed);
    }

    // An unknown code answers 500, not 404; existing clients rely on it.
    let long_url = state.link_service.expand(uri.path()).await.map_err(|e| {
        tracing::warn!(path = uri.path(), error = %e, "Failed to find full URL");
        AppError::internal("Failed to get full url", e.to_string())
    })?;

    Ok(Redirect::temporary(&long_url))
}
