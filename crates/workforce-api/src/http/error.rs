//! Application error type mapping to HTTP status codes.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use workforce_types::error::{CatalogKind, LookupError};

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// Catalog lookup errors.
    Lookup(LookupError),
    /// Generic internal error.
    Internal(String),
}

impl From<LookupError> for AppError {
    fn from(e: LookupError) -> Self {
        AppError::Lookup(e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Lookup(e @ LookupError::NotFound { kind, .. }) => {
                let code = match kind {
                    CatalogKind::Skill => "SKILL_NOT_FOUND",
                    CatalogKind::Industry => "INDUSTRY_NOT_FOUND",
                    CatalogKind::Check => "CHECK_NOT_FOUND",
                };
                (StatusCode::NOT_FOUND, code, e.to_string())
            }
            AppError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR", msg.clone())
            }
        };

        let body = json!({
            "errors": [{
                "code": code,
                "message": message,
            }],
            "meta": {
                "timestamp": chrono::Utc::now().to_rfc3339(),
            }
        });

        (
            status,
            [(axum::http::header::CONTENT_TYPE, "application/json")],
            body.to_string(),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_404() {
        let err = AppError::from(LookupError::NotFound {
            kind: CatalogKind::Skill,
            shortcode: "nope".to_string(),
        });
        let resp = err.into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            resp.headers()[axum::http::header::CONTENT_TYPE],
            "application/json"
        );
    }

    #[test]
    fn internal_maps_to_500() {
        let resp = AppError::Internal("boom".to_string()).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
