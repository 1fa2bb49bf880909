//! HTTP request handlers.

pub mod method_not_allowed;
pub mod redirect;
pub mod shorten;

pub use method_not_allowed::method_not_allowed_handler;
pub use redirect::redirect_handler;
pub use shorten::shorten_handler;
