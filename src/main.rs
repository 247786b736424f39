//! Roster server binary
//!
//! Reads its configuration from the YAML file named by `ROSTER_CONFIG`, or
//! falls back to the defaults (`0.0.0.0:5000`, `/graphql`, demo data loaded).

use anyhow::{Context, Result};
use roster::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match std::env::var("ROSTER_CONFIG") {
        Ok(path) => ServerConfig::from_yaml_file(&path)
            .with_context(|| format!("failed to load config from {}", path))?,
        Err(_) => ServerConfig::default(),
    };

    tracing::info!(
        "Starting {} v{}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    );

    ServerBuilder::new()
        .with_config(config)
        .with_roster_service(InMemoryRosterService::new())
        .serve()
        .await
}
