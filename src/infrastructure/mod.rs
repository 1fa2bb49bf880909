//! Infrastructure layer for external integrations.
//!
//! - [`persistence`] - SQLite pool, schema bootstrap and repository implementations

pub mod persistence;
