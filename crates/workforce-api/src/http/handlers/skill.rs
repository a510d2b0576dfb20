//! Skill lookup handlers.

use axum::extract::{Path, State};
use axum::response::Response;

use workforce_core::selector::Selector;

use crate::http::error::AppError;
use crate::http::handlers::json_response;
use crate::state::AppState;

/// GET /skills - List every skill.
pub async fn list_skills(State(state): State<AppState>) -> Result<Response, AppError> {
    respond(&state, Selector::All)
}

/// GET /skills/{shortcode} - One skill, or every skill for `*`.
///
/// In legacy mode the shortcode is ignored and the full list is returned.
pub async fn get_skill(
    State(state): State<AppState>,
    Path(shortcode): Path<String>,
) -> Result<Response, AppError> {
    let selector = if state.legacy_handlers {
        Selector::All
    } else {
        Selector::parse(&shortcode)
    };
    respond(&state, selector)
}

fn respond(state: &AppState, selector: Selector) -> Result<Response, AppError> {
    let selection = state.catalog.select_skills(&selector)?;
    json_response(&selection)
}
