//! Note data model.
//!
//! A note is not stored as a struct — it is reconstructed from the object
//! key and backend-assigned metadata. The wire field for the key is
//! `filename` for compatibility with existing clients.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A full note, as returned by [`NoteRepository::get`](crate::NoteRepository::get).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Note {
    /// Opaque storage key, unique and immutable once assigned
    #[serde(rename = "filename")]
    pub key: String,
    /// Human-readable title derived from the key; display-only, may collide
    pub title: String,
    /// UTF-8 body
    pub content: String,
    /// Backend-assigned modification time, monotonic per key on overwrite
    pub last_modified: DateTime<Utc>,
}

/// Listing row: key plus metadata, no body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NoteSummary {
    #[serde(rename = "filename")]
    pub key: String,
    pub title: String,
    pub last_modified: DateTime<Utc>,
    /// Byte length, backend-assigned
    pub size: u64,
}
