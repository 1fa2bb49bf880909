//! Application layer services implementing business logic.
//!
//! Services consume repository traits and expose the operations HTTP handlers
//! and the admin CLI call.
//!
//! - [`services::link_service::LinkService`] - Short link creation and expansion
//! - [`services::auth_service::AuthService`] - Bearer token validation and provisioning

pub mod services;
