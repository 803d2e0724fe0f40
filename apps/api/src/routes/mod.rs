pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::generation::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Export API
        .route("/api/v1/resumes/export", post(handlers::handle_export_resume))
        .route(
            "/api/v1/cover-letters/export",
            post(handlers::handle_export_cover_letter),
        )
        // Suggestion preview
        .route("/api/v1/suggestions", post(handlers::handle_suggest))
        .with_state(state)
}
