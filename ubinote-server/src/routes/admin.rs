//! Admin endpoints: /health, /api/stats

use crate::error::Result;
use crate::state::AppState;
use axum::extract::State;
use axum::Json;
use serde::Serialize;
use std::sync::Arc;

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    /// Storage backend in use ("s3" or "memory")
    pub storage: &'static str,
}

/// Health check endpoint
///
/// GET /health
///
/// Returns a simple health check response to verify the server is running.
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    tracing::debug!("health check requested");
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        storage: state.config.storage_type_str(),
    })
}

/// Server statistics response
#[derive(Serialize)]
pub struct StatsResponse {
    /// Server uptime in seconds
    pub uptime_secs: u64,
    /// Storage type (s3 or memory)
    pub storage_type: &'static str,
    /// Number of notes currently stored
    pub note_count: usize,
    /// Server version
    pub version: &'static str,
}

/// Server statistics endpoint
///
/// GET /api/stats
///
/// Returns uptime, storage type, and the current note count. The count
/// comes from a full listing, so this shares the listing's scale limits.
pub async fn stats(State(state): State<Arc<AppState>>) -> Result<Json<StatsResponse>> {
    tracing::info!("server stats requested");

    let notes = state.repo.list().await?;

    Ok(Json(StatsResponse {
        uptime_secs: state.uptime_secs(),
        storage_type: state.config.storage_type_str(),
        note_count: notes.len(),
        version: env!("CARGO_PKG_VERSION"),
    }))
}
