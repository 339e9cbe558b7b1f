//! Remote collaborators module
//!
//! Blocking HTTP implementations of the assistant's external services.

mod http;
mod types;

pub use http::HttpServices;
pub use types::*;
