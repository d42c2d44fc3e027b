//! Note CRUD endpoints: /api/upload, /api/list, /api/download, /api/delete
//!
//! Response envelopes keep the `success`/`message`/`filename` field names
//! the existing web client consumes.

use crate::error::{Result, ServerError};
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use ubinote_core::{Note, NoteSummary};

/// Upload request body
#[derive(Deserialize)]
pub struct UploadRequest {
    pub title: String,
    pub content: String,
    /// Existing key: present on save-in-place, absent on first upload
    #[serde(default, rename = "filename")]
    pub key: Option<String>,
}

/// Upload response
#[derive(Serialize)]
pub struct UploadResponse {
    pub success: bool,
    pub message: String,
    /// The resolved storage key
    pub filename: String,
}

/// Create a note, or update one in place
///
/// POST /api/upload
///
/// Body: `{ title, content, filename? }`. Title and content must be
/// non-empty after trimming — emptiness is validated here at the boundary,
/// not in the repository. A `filename` targets that exact key, leaving it
/// unchanged while refreshing the body.
pub async fn upload(
    State(state): State<Arc<AppState>>,
    Json(req): Json<UploadRequest>,
) -> Result<Json<UploadResponse>> {
    if req.title.trim().is_empty() {
        return Err(ServerError::bad_request("Note title is required"));
    }
    if req.content.trim().is_empty() {
        return Err(ServerError::bad_request("Note content is required"));
    }

    tracing::info!(update = req.key.is_some(), "note upload requested");

    let key = state
        .repo
        .save(&req.title, &req.content, req.key.as_deref())
        .await?;

    Ok(Json(UploadResponse {
        success: true,
        message: "Note uploaded successfully".to_string(),
        filename: key,
    }))
}

/// Listing response
#[derive(Serialize)]
pub struct ListResponse {
    pub success: bool,
    pub message: String,
    pub notes: Vec<NoteSummary>,
}

/// List all notes, newest first
///
/// GET /api/list
pub async fn list(State(state): State<Arc<AppState>>) -> Result<Json<ListResponse>> {
    let notes = state.repo.list().await?;

    Ok(Json(ListResponse {
        success: true,
        message: format!("Found {} notes", notes.len()),
        notes,
    }))
}

/// Download response
#[derive(Serialize)]
pub struct DownloadResponse {
    pub success: bool,
    pub message: String,
    pub data: Note,
}

/// Fetch one note by key
///
/// GET /api/download/{key}
///
/// The key is the remainder of the path (keys contain `/`).
/// Returns 404 when the key does not exist.
pub async fn download(
    State(state): State<Arc<AppState>>,
    Path(key): Path<String>,
) -> Result<Json<DownloadResponse>> {
    let note = state.repo.get(&key).await?;

    Ok(Json(DownloadResponse {
        success: true,
        message: "Note downloaded successfully".to_string(),
        data: note,
    }))
}

/// Delete response
#[derive(Serialize)]
pub struct DeleteResponse {
    pub success: bool,
    pub message: String,
}

/// Delete one note by key
///
/// DELETE /api/delete/{key}
///
/// Returns 404 when the key does not exist — including a repeated delete
/// of the same key; clients wanting idempotent semantics treat that as
/// "already gone".
pub async fn delete(
    State(state): State<Arc<AppState>>,
    Path(key): Path<String>,
) -> Result<Json<DeleteResponse>> {
    state.repo.delete(&key).await?;

    tracing::info!(key = %key, "note deleted");

    Ok(Json(DeleteResponse {
        success: true,
        message: "Note deleted successfully".to_string(),
    }))
}
