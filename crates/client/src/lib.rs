//! HTTP client for the EMMIS rule validation endpoint.
//!
//! Sends formatted validation requests with [`reqwest`] and hands back the
//! service's operation result. Payload formatting and response reduction
//! live in `emmis-core`.

pub mod api;
pub mod config;

pub use api::{ValidationClient, ValidationClientError, VALIDATION_API_PATH};
pub use config::ClientConfig;
