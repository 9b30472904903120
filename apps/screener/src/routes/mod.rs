pub mod health;

use axum::{
    routing::{get, patch, post},
    Router,
};

use crate::screening::handlers as screening;
use crate::state::AppState;
use crate::storage::handlers as results;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Engine
        .route("/api/v1/keywords", post(screening::handle_extract_keywords))
        .route("/api/v1/analyze", post(screening::handle_analyze))
        .route(
            "/api/v1/resumes/upload",
            post(screening::handle_upload_resumes),
        )
        // Screening runs
        .route("/api/v1/screenings", post(screening::handle_screen))
        .route(
            "/api/v1/screenings/threshold",
            post(screening::handle_rethreshold),
        )
        // Stored results
        .route(
            "/api/v1/results",
            get(results::handle_list_results).delete(results::handle_clear_results),
        )
        .route("/api/v1/results/usage", get(results::handle_results_usage))
        .route(
            "/api/v1/results/:id",
            get(results::handle_get_result).delete(results::handle_delete_result),
        )
        .route(
            "/api/v1/results/:id/candidates",
            get(results::handle_result_candidates),
        )
        .route(
            "/api/v1/results/:id/threshold",
            patch(results::handle_update_threshold),
        )
        .route(
            "/api/v1/results/:id/export",
            get(results::handle_export_result),
        )
        .with_state(state)
}
