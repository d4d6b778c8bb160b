//! triage-server library root.
//!
//! HTTP JSON API over the scoring engine and the patient store. Exposed as a
//! library so integration tests can drive the router in-process.

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use state::AppState;

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/scores", get(routes::scores::list_scores))
        .route("/scores/{id}", get(routes::scores::get_score_detail))
        .route("/assessments", post(routes::assessments::create_assessment))
        .route("/patients", get(routes::patients::list_patients))
        .route("/patients/{id}", get(routes::patients::get_patient))
        .route("/stats", get(routes::stats::get_stats))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
