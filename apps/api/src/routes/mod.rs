pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    http::{Method, Uri},
    routing::{get, post},
    Router,
};

use crate::analysis::handlers;
use crate::errors::AppError;
use crate::state::AppState;

async fn route_not_found(method: Method, uri: Uri) -> AppError {
    AppError::NotFound(format!("Route not found: {method} {}", uri.path()))
}

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/api/health", get(health::health_handler))
        // Resume API
        .route(
            "/api/resume/validate",
            post(handlers::handle_validate).layer(DefaultBodyLimit::max(upload_limit)),
        )
        .route(
            "/api/resume/upload",
            post(handlers::handle_upload).layer(DefaultBodyLimit::max(upload_limit)),
        )
        .route(
            "/api/resume/analysis/:id",
            get(handlers::handle_get_analysis),
        )
        .route(
            "/api/resume/user/:user_id",
            get(handlers::handle_list_for_user),
        )
        .route(
            "/api/resume/download/:id",
            post(handlers::handle_download),
        )
        .fallback(route_not_found)
        .with_state(state)
}
