//! HTTP route handlers and router configuration

mod admin;
mod notes;

use crate::state::AppState;
use axum::extract::DefaultBodyLimit;
use axum::routing::{delete, get, post};
use axum::Router;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Build the main application router
pub fn build_router(state: Arc<AppState>) -> Router {
    let mut router = Router::new()
        // Health check
        .route("/health", get(admin::health))
        .route("/api/stats", get(admin::stats))
        // Note CRUD
        .route("/api/upload", post(notes::upload))
        .route("/api/list", get(notes::list))
        // Keys contain '/', so these take a wildcard segment
        .route("/api/download/*key", get(notes::download))
        .route("/api/delete/*key", delete(notes::delete))
        .layer(DefaultBodyLimit::max(state.config.body_limit))
        .with_state(state.clone());

    // Add middleware
    router = router.layer(TraceLayer::new_for_http());

    // Add CORS if enabled
    if state.config.cors_enabled {
        router = router.layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        );
    }

    router
}
