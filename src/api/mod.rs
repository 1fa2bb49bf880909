//! HTTP layer translating requests into service calls.
//!
//! - [`dto`] - Response bodies
//! - [`handlers`] - Request handlers
//! - [`middleware`] - Bearer authentication and request tracing
//! - [`routes`] - Route configuration

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
