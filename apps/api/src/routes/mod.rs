pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::evaluation::handlers as evaluation;
use crate::pipeline::handlers as pipeline;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/enhance", post(pipeline::handle_enhance))
        .route("/api/v1/ats/evaluate", post(evaluation::handle_ats_evaluate))
        .route(
            "/api/v1/sections/headings",
            post(evaluation::handle_section_headings),
        )
        .route(
            "/api/v1/sections/enhance",
            post(evaluation::handle_section_enhance),
        )
        .layer(DefaultBodyLimit::max(upload_limit))
        .with_state(state)
}
