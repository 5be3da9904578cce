pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::cv::handlers as cv;
use crate::skills::handlers as skills;
use crate::state::AppState;
use crate::templates::handlers as templates;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Templates
        .route("/api/v1/templates", get(templates::handle_list_templates))
        // Inline records
        .route("/api/v1/cv/canonicalize", post(cv::handle_canonicalize))
        .route("/api/v1/cv/render/:template", post(templates::handle_render))
        .route("/api/v1/skills/assess", post(skills::handle_assess))
        // Upstream records
        .route("/api/v1/cv/:id", get(cv::handle_get_cv))
        .route("/api/v1/cv/:id/render/:template", get(cv::handle_render_cv))
        .route("/api/v1/cv/:id/skills", get(cv::handle_cv_skills))
        .with_state(state)
}
