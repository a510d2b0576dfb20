//! Check lookup handlers.

use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use workforce_core::catalog::Selection;
use workforce_core::selector::Selector;
use workforce_types::check::CheckKind;

use crate::http::error::AppError;
use crate::http::handlers::json_response;
use crate::state::AppState;

/// Response item for a check.
#[derive(Debug, Serialize, PartialEq)]
pub(crate) struct CheckItem {
    shortcode: &'static str,
    name: &'static str,
}

impl From<CheckKind> for CheckItem {
    fn from(kind: CheckKind) -> Self {
        Self {
            shortcode: kind.shortcode(),
            name: kind.name(),
        }
    }
}

/// GET /checks - List every check.
pub async fn list_checks(State(state): State<AppState>) -> Result<Response, AppError> {
    respond(&state, Selector::All)
}

/// GET /checks/{shortcode} - One check, or every check for `*`.
///
/// In legacy mode the shortcode is echoed back as plain text.
pub async fn get_check(
    State(state): State<AppState>,
    Path(shortcode): Path<String>,
) -> Result<Response, AppError> {
    if state.legacy_handlers {
        return Ok(format!("Check Shortcode: {shortcode}\n").into_response());
    }
    respond(&state, Selector::parse(&shortcode))
}

fn respond(state: &AppState, selector: Selector) -> Result<Response, AppError> {
    match state.catalog.select_checks(&selector)? {
        Selection::All(checks) => {
            let items: Vec<CheckItem> = checks.iter().copied().map(CheckItem::from).collect();
            json_response(&items)
        }
        Selection::One(check) => json_response(&CheckItem::from(*check)),
    }
}
