//! UbiNote server CLI
//!
//! Run with: `cargo run -p ubinote-server -- --help`

use clap::Parser;
use ubinote_server::{init_logging, ServerConfig, UbinoteServer};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = ServerConfig::parse();

    init_logging(&config);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        storage = config.storage_type_str(),
        addr = %config.listen_addr,
        cors = config.cors_enabled,
        "Starting UbiNote server"
    );

    let server = UbinoteServer::new(config).await?;
    server.run().await.map_err(Into::into)
}
