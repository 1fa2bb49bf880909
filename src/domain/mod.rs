//! Domain layer containing business entities and repository contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Core data structures (links and authorization tokens)
//! - [`repositories`] - Data access trait definitions
//!
//! The domain layer has no dependency on SQLite or HTTP. Concrete storage lives in
//! [`crate::infrastructure::persistence`], business rules in
//! [`crate::application::services`].

pub mod entities;
pub mod repositories;
