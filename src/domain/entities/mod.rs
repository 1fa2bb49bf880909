//! Core domain entities.
//!
//! - [`Link`] - A short token mapped to its original URL
//! - [`AuthorizationToken`] - The shared bearer credential
//!
//! `NewLink` is the input shape for creating a link.

pub mod link;
pub mod token;

pub use link::{Link, NewLink, ShortUrl};
pub use token::AuthorizationToken;
