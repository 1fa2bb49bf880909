//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `/c`        - Link creation (Bearer token required)
//! - anything else - Short link redirect (public)
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Authentication** - Bearer token on `/c`

use crate::api;
use crate::api::handlers::redirect_handler;
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .merge(api::routes::protected_routes(state.clone()))
        .fallback(redirect_handler)
        .with_state(state)
        .layer(tracing::layer())
}
