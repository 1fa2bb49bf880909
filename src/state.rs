//! Shared application state injected into handlers.

use sqlx::SqlitePool;
use std::sync::Arc;

use crate::application::services::{AuthService, LinkService};
use crate::infrastructure::persistence::{SqliteLinkRepository, SqliteTokenRepository};

/// Services available to every handler.
///
/// Services hold their repositories as trait objects, so tests can swap the
/// SQLite store for another implementation.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService>,
    pub auth_service: Arc<AuthService>,
}

impl AppState {
    /// Wires SQLite-backed services over a shared pool.
    pub fn new(pool: Arc<SqlitePool>, base_url: &str) -> Self {
        let link_repository = Arc::new(SqliteLinkRepository::new(pool.clone()));
        let token_repository = Arc::new(SqliteTokenRepository::new(pool));

        Self {
            link_service: Arc::new(LinkService::new(link_repository, base_url)),
            auth_service: Arc::new(AuthService::new(token_repository)),
        }
    }
}
