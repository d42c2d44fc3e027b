//! AWS storage backend for UbiNote
//!
//! Implements the `ubinote-core` storage traits against Amazon S3 (or an
//! S3-compatible endpoint such as MinIO/LocalStack).
//!
//! ## Usage
//!
//! ```ignore
//! use ubinote_storage_aws::{S3Config, S3Storage};
//!
//! let sdk_config = aws_config::load_defaults(BehaviorVersion::latest()).await;
//! let storage = S3Storage::new(
//!     &sdk_config,
//!     S3Config { bucket: "my-bucket".to_string(), ..Default::default() },
//! )?;
//! ```

pub mod error;
pub mod s3;

// Re-export main types
pub use error::{AwsStorageError, Result};
pub use s3::{S3Config, S3Storage};

// Re-export core traits for convenience
pub use ubinote_core::{Storage, StorageRead, StorageWrite};
