//! Handler for link creation endpoint.

use axum::{
    Json,
    extract::{RawQuery, State},
};
use url::Url;

use crate::api::dto::shorten::ShortenResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short URL for the `url` query parameter.
///
/// # Endpoint
///
/// `POST /c?url=<absolute url>` (also `GET`)
///
/// Requires `Authorization: Bearer <token>`, enforced by
/// [`crate::api::middleware::auth::layer`].
///
/// # Response
///
/// ```json
/// {
///   "url": "https://short.example/Ab3dE-fG_hIj",
///   "shorturl": "https://short.example/Ab3dE-fG_hIj"
/// }
/// ```
///
/// # Errors
///
/// - `400 Malformed URL` if `url` is missing or not an absolute URL
/// - `500 Failed to create short url` if the link cannot be stored
pub async fn shorten_handler(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> Result<Json<ShortenResponse>, AppError> {
    let long_url = url_param(query.as_deref()).unwrap_or_default();
    tracing::info!(url = %long_url, "URL given");

    if let Err(details) = check_long_url(&long_url) {
        tracing::warn!(url = %long_url.escape_debug(), error = %details, "Malformed URL");
        return Err(AppError::bad_request("Malformed URL", details));
    }

    let short_url = state.link_service.shorten(&long_url).await.map_err(|e| {
        tracing::error!(error = %e, "Creating short url failed");
        AppError::internal("Failed to create short url", e.to_string())
    })?;

    tracing::info!(url = %long_url, short_url = %short_url, "Short url created");

    Ok(Json(ShortenResponse::from(short_url)))
}

/// Accepts an absolute URL that can be stored verbatim and later sent back
/// as a `Location` header.
///
/// `Url::parse` silently strips control characters and surrounding spaces,
/// so those are rejected before parsing.
fn check_long_url(long_url: &str) -> Result<(), String> {
    if long_url.chars().any(|c| c.is_control()) {
        return Err("URL contains control characters".to_string());
    }

    if long_url.trim() != long_url {
        return Err("URL has surrounding whitespace".to_string());
    }

    Url::parse(long_url).map(|_| ()).map_err(|e| e.to_string())
}

/// Returns the first `url` value of a raw query string, percent-decoded.
fn url_param(query: Option<&str>) -> Option<String> {
    url::form_urlencoded::parse(query?.as_bytes())
        .find(|(k, _)| k == "url")
        .map(|(_, v)| v.into_owned())
}
