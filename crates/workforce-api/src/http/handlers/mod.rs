//! HTTP request handlers for the REST API.
//!
//! Every collection is exposed twice: the bare collection path lists
//! everything, and `/{shortcode}` looks up one entry (`*` also lists).

pub mod check;
pub mod industry;
pub mod skill;

use axum::http::header;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::http::error::AppError;

/// Serialize `value` into an `application/json` response.
pub(crate) fn json_response<T: Serialize>(value: &T) -> Result<Response, AppError> {
    let body = serde_json::to_string(value)
        .map_err(|e| AppError::Internal(format!("Failed to serialize response: {e}")))?;

    Ok(([(header::CONTENT_TYPE, "application/json")], body).into_response())
}
