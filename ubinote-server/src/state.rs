//! Application state management
//!
//! One repository instance, constructed at startup from configuration and
//! shared `Arc`-wrapped across handlers. The storage backend behind it is
//! selected at runtime: S3 when a bucket is configured, in-memory otherwise.

use crate::config::ServerConfig;
use aws_config::BehaviorVersion;
use std::sync::Arc;
use std::time::Instant;
use ubinote_core::{MemoryStorage, NoteRepository, Storage};
use ubinote_storage_aws::{S3Config, S3Storage};

/// Shared application state
#[derive(Debug)]
pub struct AppState {
    /// Server configuration
    pub config: ServerConfig,
    /// Note repository over the configured backend
    pub repo: NoteRepository,
    /// Startup instant, for uptime reporting
    started_at: Instant,
}

impl AppState {
    /// Build state with the backend selected by configuration.
    ///
    /// A configured bucket without a resolvable region (or with an empty
    /// name) fails here, before the listener binds.
    pub async fn init(config: ServerConfig) -> ubinote_core::Result<Self> {
        let storage: Arc<dyn Storage> = match &config.bucket {
            Some(bucket) => {
                let sdk_config = aws_config::load_defaults(BehaviorVersion::latest()).await;
                let s3_config = S3Config {
                    bucket: bucket.clone(),
                    endpoint: config.s3_endpoint.clone(),
                    timeout_ms: Some(config.s3_timeout_ms),
                    max_retries: Some(config.s3_max_retries),
                    ..Default::default()
                };
                Arc::new(S3Storage::new(&sdk_config, s3_config)?)
            }
            None => Arc::new(MemoryStorage::new()),
        };

        Ok(Self::with_storage(config, storage))
    }

    /// Build state over an explicit storage backend (used by tests)
    pub fn with_storage(config: ServerConfig, storage: Arc<dyn Storage>) -> Self {
        let repo = NoteRepository::new(storage, config.key_prefix.clone());
        Self {
            config,
            repo,
            started_at: Instant::now(),
        }
    }

    /// Seconds since this state was constructed
    pub fn uptime_secs(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}
