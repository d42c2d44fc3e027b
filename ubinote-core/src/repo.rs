//! Note repository: CRUD orchestration over an injected storage backend.
//!
//! Each operation is a single round-trip to the backend — no internal
//! concurrency, caching, locking, or retries. Cancellation and timeouts are
//! the backend client's concern.

use crate::error::{Error, Result};
use crate::keys::{derive_title, generate_key, NOTE_EXTENSION};
use crate::note::{Note, NoteSummary};
use crate::storage::Storage;
use chrono::Utc;
use std::sync::Arc;

/// Content type attached to every note object
pub const CONTENT_TYPE_MARKDOWN: &str = "text/markdown";

/// Façade over an object-storage backend, scoped to one key prefix.
///
/// Constructed once at startup and injected into the boundary layer; the
/// backend client handle is assumed safe for concurrent in-flight requests.
#[derive(Debug, Clone)]
pub struct NoteRepository {
    storage: Arc<dyn Storage>,
    prefix: String,
}

impl NoteRepository {
    /// Create a repository over `storage`, keyed under `prefix`.
    pub fn new(storage: Arc<dyn Storage>, prefix: impl Into<String>) -> Self {
        let prefix = prefix.into().trim_matches('/').to_string();
        Self { storage, prefix }
    }

    /// The key prefix this repository enumerates
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Create a note, or update one in place.
    ///
    /// With `existing_key` the write targets that exact key (the title is
    /// ignored for keying purposes); without it a fresh key is generated
    /// from the current timestamp and sanitized title. Same-second
    /// collisions on identical sanitized titles race last-writer-wins at
    /// the backend.
    ///
    /// Emptiness of `title`/`content` is a boundary concern — this method
    /// will happily store an empty body if invoked directly.
    pub async fn save(
        &self,
        title: &str,
        content: &str,
        existing_key: Option<&str>,
    ) -> Result<String> {
        let key = match existing_key {
            Some(k) if k.is_empty() => return Err(Error::invalid_key("empty key")),
            Some(k) => k.to_string(),
            None => generate_key(&self.prefix, title, Utc::now()),
        };

        tracing::debug!(key = %key, update = existing_key.is_some(), "saving note");
        self.storage
            .put(&key, content.as_bytes(), CONTENT_TYPE_MARKDOWN)
            .await?;
        Ok(key)
    }

    /// Enumerate every note under the prefix, newest first.
    ///
    /// Objects without the note extension are ignored (defensive filtering
    /// against an accidentally shared bucket/prefix). Ties on
    /// `last_modified` keep the backend's enumeration order — the sort is
    /// stable. Full, unpaginated listing; not meant for unbounded counts.
    pub async fn list(&self) -> Result<Vec<NoteSummary>> {
        let objects = self.storage.list(&format!("{}/", self.prefix)).await?;

        let mut notes: Vec<NoteSummary> = objects
            .into_iter()
            .filter(|obj| obj.key.ends_with(NOTE_EXTENSION))
            .map(|obj| NoteSummary {
                title: derive_title(&obj.key),
                key: obj.key,
                last_modified: obj.last_modified,
                size: obj.size,
            })
            .collect();
        notes.sort_by(|a, b| b.last_modified.cmp(&a.last_modified));

        tracing::debug!(count = notes.len(), "listed notes");
        Ok(notes)
    }

    /// Fetch a note by key.
    ///
    /// The body is decoded as UTF-8; a body that fails to decode is a
    /// backend error, not a panic. Absent key yields `Error::NotFound`.
    pub async fn get(&self, key: &str) -> Result<Note> {
        if key.is_empty() {
            return Err(Error::invalid_key("empty key"));
        }

        let body = self.storage.get(key).await?;
        let content = String::from_utf8(body.bytes)
            .map_err(|e| Error::backend(format!("Note body at '{}' is not UTF-8: {}", key, e)))?;

        Ok(Note {
            title: derive_title(key),
            key: key.to_string(),
            content,
            last_modified: body.last_modified,
        })
    }

    /// Delete a note by key, permanently.
    ///
    /// A second delete of an already-deleted key reports `Error::NotFound`,
    /// not success — the idempotence policy is left to the caller.
    pub async fn delete(&self, key: &str) -> Result<()> {
        if key.is_empty() {
            return Err(Error::invalid_key("empty key"));
        }

        tracing::debug!(key = %key, "deleting note");
        self.storage.delete(key).await
    }
}
