//! Core note repository for UbiNote
//!
//! Maps human note titles to stable object-storage keys, reconstructs
//! display titles and timestamps from keys, and normalizes backend failures
//! into a small error taxonomy. Depends only on the injected storage traits
//! in [`storage`]; backends live in their own crates
//! (e.g. `ubinote-storage-aws`).

pub mod error;
pub mod keys;
pub mod note;
pub mod repo;
pub mod storage;

pub use error::{Error, Result};
pub use keys::{derive_title, generate_key, sanitize_title, NOTE_EXTENSION};
pub use note::{Note, NoteSummary};
pub use repo::{NoteRepository, CONTENT_TYPE_MARKDOWN};
pub use storage::{MemoryStorage, ObjectBody, ObjectInfo, Storage, StorageRead, StorageWrite};
