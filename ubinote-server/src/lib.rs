//! UbiNote HTTP Server
//!
//! A thin HTTP API over the note repository in `ubinote-core`, storing
//! notes as Markdown objects in S3 (via `ubinote-storage-aws`) or in
//! memory for credential-less development.
//!
//! # Endpoints
//!
//! - `GET /health`, `GET /api/stats`
//! - `POST /api/upload` — create or update a note
//! - `GET /api/list` — all notes, newest first
//! - `GET /api/download/{key}` / `DELETE /api/delete/{key}`
//!
//! # Example
//!
//! ```ignore
//! use ubinote_server::{ServerConfig, UbinoteServer};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = ServerConfig::default();
//!     let server = UbinoteServer::new(config).await.unwrap();
//!     server.run().await.unwrap();
//! }
//! ```

pub mod config;
pub mod error;
pub mod routes;
pub mod state;
pub mod telemetry;

pub use config::ServerConfig;
pub use error::{Result, ServerError};
pub use state::AppState;
pub use telemetry::init_logging;

use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

/// UbiNote HTTP server
pub struct UbinoteServer {
    /// Application state
    state: Arc<AppState>,
    /// Configured router
    router: Router,
}

impl UbinoteServer {
    /// Create a new server with the given configuration.
    ///
    /// Fails when the configured S3 backend is unusable (missing region,
    /// empty bucket name) so misconfiguration is fatal before binding.
    pub async fn new(config: ServerConfig) -> ubinote_core::Result<Self> {
        let state = Arc::new(AppState::init(config).await?);
        let router = routes::build_router(state.clone());

        Ok(Self { state, router })
    }

    /// Get a reference to the application state
    pub fn state(&self) -> &Arc<AppState> {
        &self.state
    }

    /// Get the router for testing
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server
    pub async fn run(self) -> std::io::Result<()> {
        let addr = self.state.config.listen_addr;
        let listener = TcpListener::bind(addr).await?;

        info!(
            addr = %addr,
            storage = self.state.config.storage_type_str(),
            prefix = %self.state.repo.prefix(),
            "UbiNote server listening"
        );

        axum::serve(listener, self.router).await
    }
}
