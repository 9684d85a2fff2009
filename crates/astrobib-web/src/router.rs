//! Axum router — maps URL paths to handlers.

use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::handlers::{
    import::{import_csv, import_url},
    insight::{latest_insight, submit_insight},
    search::{filter_options, list_publications},
    stats::get_stats,
};
use crate::state::{AppState, SharedState};

/// Build and return the full Axum router.
pub fn build_router(state: AppState) -> Router {
    let shared: SharedState = Arc::new(state);

    Router::new()
        .route("/api/stats", get(get_stats))
        .route("/api/publications", get(list_publications))
        .route("/api/filters", get(filter_options))
        .route("/api/import/csv", post(import_csv))
        .route("/api/import/url", post(import_url))
        .route("/api/insight", get(latest_insight).post(submit_insight))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(shared)
}
