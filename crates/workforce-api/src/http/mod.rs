//! HTTP/REST API layer.
//!
//! Axum router serving read-only lookups over the loaded catalog.

pub mod error;
pub mod handlers;
pub mod router;
