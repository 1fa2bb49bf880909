//! API route configuration.

use axum::{Router, middleware, routing::get};

use crate::api::handlers::{method_not_allowed_handler, shorten_handler};
use crate::api::middleware::auth;
use crate::state::AppState;

/// The link creation route, protected by Bearer token authentication.
///
/// # Endpoints
///
/// - `POST /c?url=...` - Create a short URL
/// - `GET  /c?url=...` - Same as `POST`
///
/// Authentication wraps the method fallback too, so an unauthenticated
/// request with any other method gets `401` before `405`.
pub fn protected_routes(state: AppState) -> Router<AppState> {
    let create = get(shorten_handler)
        .post(shorten_handler)
        .fallback(method_not_allowed_handler)
        .layer(middleware::from_fn_with_state(state, auth::layer));

    Router::new().route("/c", create)
}
