//! Server configuration

use clap::Parser;
use std::net::SocketAddr;

/// Server configuration, sourced from CLI flags with environment fallbacks.
///
/// Constructed once in `main` and owned by the application state; nothing
/// reads the environment after startup.
#[derive(Parser, Debug, Clone)]
#[command(name = "ubinote-server")]
#[command(about = "UbiNote HTTP API server backed by S3 object storage")]
pub struct ServerConfig {
    /// Address to listen on
    #[arg(long, env = "UBINOTE_LISTEN_ADDR", default_value = "0.0.0.0:8000")]
    pub listen_addr: SocketAddr,

    /// S3 bucket holding note objects (enables the S3 backend; omit to run
    /// against in-memory storage, for development without credentials)
    #[arg(long, env = "UBINOTE_S3_BUCKET")]
    pub bucket: Option<String>,

    /// Key prefix under which every note object lives
    #[arg(long, env = "UBINOTE_KEY_PREFIX", default_value = "ubinote")]
    pub key_prefix: String,

    /// S3 endpoint override (e.g. LocalStack/MinIO)
    #[arg(long, env = "UBINOTE_S3_ENDPOINT")]
    pub s3_endpoint: Option<String>,

    /// S3 operation timeout in milliseconds (includes SDK retry time)
    #[arg(long, env = "UBINOTE_S3_TIMEOUT_MS", default_value = "10000")]
    pub s3_timeout_ms: u64,

    /// Max S3 retries after the initial attempt
    #[arg(long, env = "UBINOTE_S3_MAX_RETRIES", default_value = "2")]
    pub s3_max_retries: u32,

    /// Enable CORS (Cross-Origin Resource Sharing)
    #[arg(long, env = "UBINOTE_CORS_ENABLED", default_value = "true")]
    pub cors_enabled: bool,

    /// Request body size limit in bytes (default 1MB)
    #[arg(long, env = "UBINOTE_BODY_LIMIT", default_value = "1048576")]
    pub body_limit: usize,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "UBINOTE_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: "127.0.0.1:8000".parse().expect("valid default addr"),
            bucket: None,
            key_prefix: "ubinote".to_string(),
            s3_endpoint: None,
            s3_timeout_ms: 10_000,
            s3_max_retries: 2,
            cors_enabled: true,
            body_limit: 1_048_576,
            log_level: "info".to_string(),
        }
    }
}

impl ServerConfig {
    /// Storage backend selected by this configuration
    pub fn storage_type_str(&self) -> &'static str {
        if self.bucket.is_some() {
            "s3"
        } else {
            "memory"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_type_follows_bucket() {
        let mut config = ServerConfig::default();
        assert_eq!(config.storage_type_str(), "memory");

        config.bucket = Some("notes-bucket".to_string());
        assert_eq!(config.storage_type_str(), "s3");
    }
}
