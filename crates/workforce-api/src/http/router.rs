//! Axum router configuration with middleware.
//!
//! Bare collection paths (`/skills`, `/skills/`) are only routed in lookup
//! mode. Middleware: CORS (the catalog is public read-only data) and request
//! tracing.

use axum::Router;
use axum::extract::State;
use axum::routing::get;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::http::handlers;
use crate::state::AppState;

/// Build the complete router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let lookup_routes = Router::new()
        .route("/skills/{shortcode}", get(handlers::skill::get_skill))
        .route(
            "/industries/{shortcode}",
            get(handlers::industry::get_industry),
        )
        .route("/checks/{shortcode}", get(handlers::check::get_check));

    // Legacy mode only knows the `{shortcode}` routes.
    let routes = if state.legacy_handlers {
        lookup_routes
    } else {
        lookup_routes
            .route("/skills", get(handlers::skill::list_skills))
            .route("/skills/", get(handlers::skill::list_skills))
            .route("/industries", get(handlers::industry::list_industries))
            .route("/industries/", get(handlers::industry::list_industries))
            .route("/checks", get(handlers::check::list_checks))
            .route("/checks/", get(handlers::check::list_checks))
    };

    routes
        .route("/health", get(health_check))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// GET /health - Liveness plus catalog sizes.
async fn health_check(State(state): State<AppState>) -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "skills": state.catalog.skills().len(),
        "industries": state.catalog.industries().len(),
        "checks": state.catalog.checks().len(),
    }))
}
