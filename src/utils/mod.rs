//! Utility functions shared by the services and the admin CLI.
//!
//! - [`code_generator`] - Short code and authorization token generation

pub mod code_generator;
