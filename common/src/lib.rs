//! Shared primitives for the Asana client workspace.
//!
//! ## Architecture
//!
//! - **common** (this crate): error locations, HTTP status handling, secret wrappers
//! - **models**: Asana data shapes and request builders
//! - **asana-client**: the HTTP client operating on models
//!
//! Nothing in here knows about Asana endpoints.

pub mod error;
pub mod http_status;
pub mod redacted_key;

#[cfg(test)]
mod tests;

pub use error::error_location::ErrorLocation;
pub use http_status::{HttpStatusCode, StatusClass};
pub use redacted_key::RedactedApiKey;
