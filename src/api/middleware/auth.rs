//! Bearer token authentication middleware.

use axum::{
    extract::{Request, State},
    http::{HeaderMap, header},
    middleware::Next,
    response::Response,
};

use crate::{error::AppError, state::AppState};

/// Scheme prefix searched for in the `Authorization` header.
const BEARER_PREFIX: &str = "Bearer ";

/// Authenticates requests using the shared bearer token.
///
/// # Header Format
///
/// ```text
/// Authorization: Bearer <token>
/// ```
///
/// # Errors
///
/// Returns `401 Unauthorized` if the header is missing, does not contain
/// `Bearer `, or carries an unknown token. The three cases are not
/// distinguished in the response.
///
/// # Example
///
/// ```rust,ignore
/// let create = get(shorten_handler)
///     .post(shorten_handler)
///     .layer(middleware::from_fn_with_state(state.clone(), auth::layer));
/// ```
pub async fn layer(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let Some(token) = bearer_token(req.headers()) else {
        tracing::warn!("Authorization header is missing or has no bearer token");
        return Err(AppError::Unauthorized);
    };

    st.auth_service.authenticate(token).await?;

    Ok(next.run(req).await)
}

/// Extracts the token following the first occurrence of `Bearer ` in the
/// `Authorization` header.
///
/// The prefix does not have to start the header value.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;

    value
        .split_once(BEARER_PREFIX)
        .map(|(_, token)| token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with(value: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_static(value));
        headers
    }

    #[test]
    fn test_bearer_token_standard() {
        let headers = headers_with("Bearer abc123");
        assert_eq!(bearer_token(&headers), Some("abc123"));
    }

    #[test]
    fn test_bearer_token_missing_header() {
        assert_eq!(bearer_token(&HeaderMap::new()), None);
    }

    #[test]
    fn test_bearer_token_missing_prefix() {
        assert_eq!(bearer_token(&headers_with("abc123")), None);
        assert_eq!(bearer_token(&headers_with("Basic abc123")), None);
    }

    #[test]
    fn test_bearer_token_prefix_is_case_sensitive() {
        assert_eq!(bearer_token(&headers_with("bearer abc123")), None);
    }

    #[test]
    fn test_bearer_token_after_first_prefix() {
        assert_eq!(
            bearer_token(&headers_with("Token Bearer abc123")),
            Some("abc123")
        );
        assert_eq!(
            bearer_token(&headers_with("Bearer abc Bearer def")),
            Some("abc Bearer def")
        );
    }

    #[test]
    fn test_bearer_token_empty() {
        assert_eq!(bearer_token(&headers_with("Bearer ")), Some(""));
    }
}
