//! S3 storage backend implementation
//!
//! Provides `S3Storage`, which implements the core `StorageRead` and
//! `StorageWrite` traits against an Amazon S3 bucket (or any S3-compatible
//! endpoint such as MinIO/LocalStack via the endpoint override).
//!
//! ## Timeout Configuration
//!
//! The `timeout_ms` setting controls the total operation timeout, which
//! **includes SDK retry time**. Failures surface immediately as normalized
//! errors; no retry loop exists outside the SDK's own configuration.

use crate::error::{AwsStorageError, Result};
use async_trait::async_trait;
use aws_sdk_s3::error::SdkError;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client;
use aws_smithy_types::retry::RetryConfig;
use aws_smithy_types::timeout::TimeoutConfig;
use chrono::{DateTime, Utc};
use std::fmt::Debug;
use std::time::Duration;
use ubinote_core::error::Error as CoreError;
use ubinote_core::storage::{ObjectBody, ObjectInfo, StorageRead, StorageWrite};

/// S3 storage configuration
#[derive(Debug, Clone, Default)]
pub struct S3Config {
    /// S3 bucket name
    pub bucket: String,
    /// Optional endpoint override (e.g. LocalStack/MinIO, or custom AWS endpoint)
    pub endpoint: Option<String>,
    /// Operation timeout in milliseconds (optional)
    pub timeout_ms: Option<u64>,
    /// Max retries *after* the initial attempt
    pub max_retries: Option<u32>,
    /// Initial backoff for retries in milliseconds (randomized with jitter by SDK)
    pub retry_base_delay_ms: Option<u64>,
    /// Max backoff for retries in milliseconds
    pub retry_max_delay_ms: Option<u64>,
}

/// S3-based storage backend
///
/// One client handle, safe for concurrent in-flight requests. Keys are used
/// verbatim; prefix scoping belongs to the repository layer.
#[derive(Clone)]
pub struct S3Storage {
    client: Client,
    bucket: String,
}

impl Debug for S3Storage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("S3Storage")
            .field("bucket", &self.bucket)
            .finish()
    }
}

impl S3Storage {
    /// Create a new S3 storage backend
    ///
    /// Fails fast with `MissingRegion`/`InvalidConfig` when the SDK config
    /// carries no region or the bucket name is empty, so a misconfigured
    /// process dies at startup rather than on the first request.
    ///
    /// # Arguments
    ///
    /// * `sdk_config` - AWS SDK configuration (from `aws_config::load_defaults()`)
    /// * `config` - S3-specific configuration (bucket, endpoint, timeout)
    ///
    /// # Example
    ///
    /// ```ignore
    /// let sdk_config = aws_config::load_defaults(BehaviorVersion::latest()).await;
    /// let storage = S3Storage::new(
    ///     &sdk_config,
    ///     S3Config { bucket: "my-bucket".to_string(), ..Default::default() },
    /// )?;
    /// ```
    pub fn new(sdk_config: &aws_config::SdkConfig, config: S3Config) -> Result<Self> {
        if sdk_config.region().is_none() {
            return Err(AwsStorageError::MissingRegion);
        }
        if config.bucket.is_empty() {
            return Err(AwsStorageError::invalid_config("bucket name is required"));
        }

        // Build S3 config by inheriting from SdkConfig (preserves HTTP client,
        // credentials provider, sleep impl) then apply our overrides
        let mut s3_config_builder = aws_sdk_s3::config::Builder::from(sdk_config);

        if let Some(endpoint) = &config.endpoint {
            s3_config_builder = s3_config_builder
                .endpoint_url(endpoint)
                // MinIO/LocalStack resolve buckets by path, not vhost
                .force_path_style(true);
        }

        if config.max_retries.is_some()
            || config.retry_base_delay_ms.is_some()
            || config.retry_max_delay_ms.is_some()
        {
            // AWS SDK uses "max attempts" = initial attempt + retries
            let max_attempts = config.max_retries.unwrap_or(0).saturating_add(1).max(1);

            let mut retry_config = RetryConfig::standard().with_max_attempts(max_attempts);
            if let Some(ms) = config.retry_base_delay_ms {
                retry_config = retry_config.with_initial_backoff(Duration::from_millis(ms));
            }
            if let Some(ms) = config.retry_max_delay_ms {
                retry_config = retry_config.with_max_backoff(Duration::from_millis(ms));
            }
            s3_config_builder = s3_config_builder.retry_config(retry_config);
        }

        if let Some(timeout_ms) = config.timeout_ms {
            let timeout_config = TimeoutConfig::builder()
                .operation_timeout(Duration::from_millis(timeout_ms))
                .build();
            s3_config_builder = s3_config_builder.timeout_config(timeout_config);
        }

        let client = Client::from_conf(s3_config_builder.build());

        Ok(Self {
            client,
            bucket: config.bucket,
        })
    }

    /// Create S3Storage from a pre-built client (for testing)
    pub fn from_client(client: Client, bucket: String) -> Self {
        Self { client, bucket }
    }

    /// Get the bucket name
    pub fn bucket(&self) -> &str {
        &self.bucket
    }
}

#[async_trait]
impl StorageRead for S3Storage {
    async fn get(&self, key: &str) -> ubinote_core::Result<ObjectBody> {
        let response = self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| core_err(map_sdk_error(e, key)))?;

        let last_modified = response
            .last_modified()
            .map(to_chrono)
            .unwrap_or_else(Utc::now);

        let bytes = response
            .body
            .collect()
            .await
            .map_err(|e| CoreError::io(format!("Failed to read S3 body for '{}': {}", key, e)))?
            .into_bytes()
            .to_vec();

        Ok(ObjectBody {
            bytes,
            last_modified,
        })
    }

    async fn exists(&self, key: &str) -> ubinote_core::Result<bool> {
        match self
            .client
            .head_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
        {
            Ok(_) => Ok(true),
            // Pattern match on SdkError to avoid panic from into_service_error()
            Err(e) => match &e {
                SdkError::ServiceError(service_err)
                    if service_err.raw().status().as_u16() == 404 =>
                {
                    Ok(false)
                }
                _ => Err(core_err(map_sdk_error(e, key))),
            },
        }
    }

    async fn list(&self, prefix: &str) -> ubinote_core::Result<Vec<ObjectInfo>> {
        let mut objects = Vec::new();
        let mut continuation_token = None;

        loop {
            let mut request = self
                .client
                .list_objects_v2()
                .bucket(&self.bucket)
                .prefix(prefix);

            if let Some(token) = continuation_token.take() {
                request = request.continuation_token(token);
            }

            let response = request
                .send()
                .await
                .map_err(|e| core_err(map_sdk_error(e, prefix)))?;

            for object in response.contents() {
                let Some(key) = object.key() else { continue };
                objects.push(ObjectInfo {
                    key: key.to_string(),
                    size: object.size().unwrap_or(0).max(0) as u64,
                    last_modified: object
                        .last_modified()
                        .map(to_chrono)
                        .unwrap_or(DateTime::UNIX_EPOCH),
                });
            }

            match response.next_continuation_token() {
                Some(token) => continuation_token = Some(token.to_string()),
                None => break,
            }
        }

        Ok(objects)
    }
}

#[async_trait]
impl StorageWrite for S3Storage {
    async fn put(&self, key: &str, bytes: &[u8], content_type: &str) -> ubinote_core::Result<()> {
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .body(ByteStream::from(bytes.to_vec()))
            .content_type(content_type)
            .send()
            .await
            .map_err(|e| core_err(map_sdk_error(e, key)))?;

        Ok(())
    }

    async fn delete(&self, key: &str) -> ubinote_core::Result<()> {
        // S3's DeleteObject succeeds on absent keys, but the storage
        // contract distinguishes NotFound. Probe with HeadObject first;
        // its 404 carries the structured status we classify on.
        self.client
            .head_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| core_err(map_sdk_error(e, key)))?;

        self.client
            .delete_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| core_err(map_sdk_error(e, key)))?;

        Ok(())
    }
}

/// Convert an AWS SDK timestamp to chrono
fn to_chrono(dt: &aws_smithy_types::DateTime) -> DateTime<Utc> {
    DateTime::from_timestamp(dt.secs(), dt.subsec_nanos()).unwrap_or(DateTime::UNIX_EPOCH)
}

fn core_err(err: AwsStorageError) -> CoreError {
    err.into()
}

/// Classify an SDK error by HTTP status and transport variant.
///
/// Status codes, not message text: 404 is the documented not-found
/// indicator, 401/403 are credential/permission failures, 429 and 5xx are
/// transient server conditions.
fn map_sdk_error<E: Debug>(err: SdkError<E>, key: &str) -> AwsStorageError {
    match &err {
        SdkError::ServiceError(service_err) => {
            let status = service_err.raw().status().as_u16();
            match status {
                404 => AwsStorageError::not_found(format!("Key not found: {}", key)),
                401 => AwsStorageError::unauthorized(format!("Unauthorized for key: {}", key)),
                403 => AwsStorageError::forbidden(format!("Access denied for key: {}", key)),
                429 | 500 | 502 | 503 | 504 => AwsStorageError::throttled(format!(
                    "Transient error for key '{}' (HTTP {})",
                    key, status
                )),
                _ => AwsStorageError::s3(format!(
                    "S3 error for key '{}' (HTTP {}): {:?}",
                    key, status, err
                )),
            }
        }
        SdkError::TimeoutError(_) => {
            AwsStorageError::io(format!("S3 timeout for key '{}': {:?}", key, err))
        }
        SdkError::DispatchFailure(_) => {
            AwsStorageError::io(format!("S3 connection error for key '{}': {:?}", key, err))
        }
        _ => AwsStorageError::s3(format!("S3 error for key '{}': {:?}", key, err)),
    }
}
