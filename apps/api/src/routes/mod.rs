pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::ai::handlers as ai_handlers;
use crate::matching::handlers as matching_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Matching
        .route(
            "/api/ai/match-candidates",
            post(matching_handlers::handle_match_candidates),
        )
        .route(
            "/api/ai/match-score",
            post(matching_handlers::handle_match_score),
        )
        .route(
            "/api/candidates/:id/recommended-jobs",
            get(matching_handlers::handle_recommended_jobs),
        )
        // AI heuristics
        .route(
            "/api/ai/analyze-resume",
            post(ai_handlers::handle_analyze_resume),
        )
        .route(
            "/api/ai/generate-questions",
            post(ai_handlers::handle_generate_questions),
        )
        .with_state(state)
}
