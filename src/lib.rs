//! # smolink
//!
//! A small URL shortener built with Axum and SQLite.
//!
//! `POST /c?url=...` with `Authorization: Bearer <token>` stores a link and
//! returns its short URL; `GET /{code}` redirects back to the original.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Entities and repository traits
//! - **Application Layer** ([`application`]) - Link and authentication services
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite repositories and schema
//! - **API Layer** ([`api`]) - Handlers, DTOs and middleware
//!
//! ## Quick Start
//!
//! ```bash
//! export BASE_URL="https://short.example"
//! export PORT=9000
//! cargo run
//! # the first start logs a generated authorization token
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{AuthService, LinkService};
    pub use crate::domain::entities::{AuthorizationToken, Link, NewLink, ShortUrl};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
