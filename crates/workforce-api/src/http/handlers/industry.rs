//! Industry lookup handlers.

use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};

use workforce_core::selector::Selector;

use crate::http::error::AppError;
use crate::http::handlers::json_response;
use crate::state::AppState;

/// GET /industries - List every industry.
pub async fn list_industries(State(state): State<AppState>) -> Result<Response, AppError> {
    respond(&state, Selector::All)
}

/// GET /industries/{shortcode} - One industry, or every industry for `*`.
///
/// In legacy mode the shortcode is echoed back as plain text.
pub async fn get_industry(
    State(state): State<AppState>,
    Path(shortcode): Path<String>,
) -> Result<Response, AppError> {
    if state.legacy_handlers {
        return Ok(format!("Industry Shortcode: {shortcode}\n").into_response());
    }
    respond(&state, Selector::parse(&shortcode))
}

fn respond(state: &AppState, selector: Selector) -> Result<Response, AppError> {
    let selection = state.catalog.select_industries(&selector)?;
    json_response(&selection)
}
