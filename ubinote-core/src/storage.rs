//! Storage traits for the object-storage backend
//!
//! This module defines the capability set the note repository consumes:
//! `put`, `get`, `list`, `delete` by key within a single bucket. The traits
//! are runtime-agnostic and use `async_trait` for async support.
//!
//! ## Traits
//!
//! - `StorageRead`: non-mutating operations (get, exists, list)
//! - `StorageWrite`: mutating operations (put, delete)
//! - `Storage`: marker trait combining both, used for type erasure behind
//!   `Arc<dyn Storage>`
//!
//! ## Implementations
//!
//! - `MemoryStorage` (this module): HashMap-backed, for tests and
//!   credential-less development
//! - `ubinote-storage-aws`: `S3Storage` over the AWS SDK

use crate::error::{Error, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::{Arc, RwLock};

/// Object body plus the metadata a `get` returns.
#[derive(Debug, Clone)]
pub struct ObjectBody {
    pub bytes: Vec<u8>,
    pub last_modified: DateTime<Utc>,
}

/// One row of a `list` result.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectInfo {
    pub key: String,
    pub size: u64,
    pub last_modified: DateTime<Utc>,
}

/// Read-only storage operations
#[async_trait]
pub trait StorageRead: Debug + Send + Sync {
    /// Fetch the object body and metadata at `key`.
    ///
    /// Returns `Error::NotFound` if no object exists at the key.
    async fn get(&self, key: &str) -> Result<ObjectBody>;

    /// Check whether an object exists at `key`
    async fn exists(&self, key: &str) -> Result<bool>;

    /// List every object under `prefix`, in the backend's native
    /// enumeration order (lexicographic for S3).
    ///
    /// Performs a full enumeration; not safe for unbounded object counts.
    async fn list(&self, prefix: &str) -> Result<Vec<ObjectInfo>>;
}

/// Mutating storage operations
#[async_trait]
pub trait StorageWrite: Debug + Send + Sync {
    /// Write `bytes` at `key`, overwriting any existing object.
    ///
    /// The backend assigns `last_modified` and `size`; overwrites refresh
    /// both, monotonically per key.
    async fn put(&self, key: &str, bytes: &[u8], content_type: &str) -> Result<()>;

    /// Delete the object at `key`.
    ///
    /// Returns `Error::NotFound` if no object exists at the key — callers
    /// wanting idempotent semantics treat that as "already gone".
    async fn delete(&self, key: &str) -> Result<()>;
}

/// Full storage capability marker
///
/// Single bound for backends supporting all operations; the repository
/// holds one as `Arc<dyn Storage>`.
pub trait Storage: StorageRead + StorageWrite {}
impl<T: StorageRead + StorageWrite> Storage for T {}

// ============================================================================
// MemoryStorage Implementation
// ============================================================================

#[derive(Debug, Clone)]
struct StoredObject {
    bytes: Vec<u8>,
    #[allow(dead_code)]
    content_type: String,
    last_modified: DateTime<Utc>,
}

/// A simple in-memory storage for testing and credential-less development
///
/// Stores objects in a HashMap with interior mutability (`Arc<RwLock<...>>`)
/// so clones share state, the way a real backend client handle would.
/// Listing returns keys in lexicographic order to match S3 enumeration.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    data: Arc<RwLock<HashMap<String, StoredObject>>>,
}

impl MemoryStorage {
    /// Create a new empty memory storage
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored objects
    pub fn len(&self) -> usize {
        self.data.read().expect("RwLock poisoned").len()
    }

    /// Whether the storage holds no objects
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl StorageRead for MemoryStorage {
    async fn get(&self, key: &str) -> Result<ObjectBody> {
        self.data
            .read()
            .expect("RwLock poisoned")
            .get(key)
            .map(|obj| ObjectBody {
                bytes: obj.bytes.clone(),
                last_modified: obj.last_modified,
            })
            .ok_or_else(|| Error::not_found(key))
    }

    async fn exists(&self, key: &str) -> Result<bool> {
        Ok(self.data.read().expect("RwLock poisoned").contains_key(key))
    }

    async fn list(&self, prefix: &str) -> Result<Vec<ObjectInfo>> {
        let data = self.data.read().expect("RwLock poisoned");
        let mut infos: Vec<ObjectInfo> = data
            .iter()
            .filter(|(k, _)| k.starts_with(prefix))
            .map(|(k, obj)| ObjectInfo {
                key: k.clone(),
                size: obj.bytes.len() as u64,
                last_modified: obj.last_modified,
            })
            .collect();
        infos.sort_by(|a, b| a.key.cmp(&b.key));
        Ok(infos)
    }
}

#[async_trait]
impl StorageWrite for MemoryStorage {
    async fn put(&self, key: &str, bytes: &[u8], content_type: &str) -> Result<()> {
        self.data.write().expect("RwLock poisoned").insert(
            key.to_string(),
            StoredObject {
                bytes: bytes.to_vec(),
                content_type: content_type.to_string(),
                last_modified: Utc::now(),
            },
        );
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<()> {
        match self.data.write().expect("RwLock poisoned").remove(key) {
            Some(_) => Ok(()),
            None => Err(Error::not_found(key)),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
