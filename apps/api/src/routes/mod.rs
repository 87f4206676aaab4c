pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::matching::handlers::handle_analyze;
use crate::state::AppState;
use crate::upload::handlers::handle_upload_resume;

pub fn build_router(state: AppState) -> Router {
    // Multipart framing adds overhead beyond the file itself
    let body_limit = state.config.max_upload_bytes as usize + 64 * 1024;

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/analyze", post(handle_analyze))
        .route("/upload-resume", post(handle_upload_resume))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
