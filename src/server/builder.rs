//! ServerBuilder for fluent API to build HTTP servers

use super::exposure::{GraphQLExposure, RestExposure};
use super::host::ServerHost;
use crate::config::ServerConfig;
use crate::core::RosterService;
use crate::storage::{InMemoryRosterService, populate_demo_data, seed};
use anyhow::{Context, Result};
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Builder for the roster HTTP server
///
/// # Example
///
/// ```ignore
/// ServerBuilder::new()
///     .with_config(ServerConfig::from_yaml_file("roster.yaml")?)
///     .with_roster_service(InMemoryRosterService::new())
///     .serve()
///     .await?;
/// ```
pub struct ServerBuilder {
    config: ServerConfig,
    roster: Option<Arc<dyn RosterService>>,
    custom_routes: Vec<Router>,
}

impl ServerBuilder {
    /// Create a new ServerBuilder with the default configuration
    pub fn new() -> Self {
        Self {
            config: ServerConfig::default(),
            roster: None,
            custom_routes: Vec::new(),
        }
    }

    /// Replace the configuration
    pub fn with_config(mut self, config: ServerConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the roster service
    ///
    /// Defaults to an empty [`InMemoryRosterService`] when not called.
    pub fn with_roster_service(mut self, service: impl RosterService + 'static) -> Self {
        self.roster = Some(Arc::new(service));
        self
    }

    /// Add custom routes to the server
    pub fn with_custom_routes(mut self, routes: Router) -> Self {
        self.custom_routes.push(routes);
        self
    }

    /// Build the transport-agnostic host
    ///
    /// Validates the configuration and loads the demo data when
    /// `seed_demo_data` is set and the roster is still empty.
    pub async fn build_host(mut self) -> Result<ServerHost> {
        self.config.validate()?;

        let roster = self
            .roster
            .take()
            .unwrap_or_else(|| Arc::new(InMemoryRosterService::new()));

        if self.config.seed_demo_data {
            if seed::is_empty(roster.as_ref()).await? {
                populate_demo_data(roster.as_ref())
                    .await
                    .context("failed to load demo data")?;
            } else {
                tracing::warn!("Roster already holds records, skipping demo data");
            }
        }

        Ok(ServerHost::new(self.config, roster))
    }

    /// Build the final router: GraphQL, health checks and custom routes
    pub async fn build(mut self) -> Result<Router> {
        let custom_routes = std::mem::take(&mut self.custom_routes);
        let host = Arc::new(self.build_host().await?);

        let rest_router = RestExposure::build_router(host.clone(), custom_routes)?;
        let graphql_router = GraphQLExposure::build_router(host)?;

        Ok(rest_router
            .merge(graphql_router)
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive()))
    }

    /// Serve the application with graceful shutdown
    ///
    /// Binds to `config.bind_address` and stops on SIGTERM or Ctrl+C.
    pub async fn serve(self) -> Result<()> {
        let addr = self.config.bind_address.clone();
        let graphql_path = self.config.graphql_path.clone();

        let app = self.build().await?;
        let listener = TcpListener::bind(&addr)
            .await
            .with_context(|| format!("failed to bind {}", addr))?;

        tracing::info!("Server listening on http://{}{}", addr, graphql_path);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Wait for shutdown signal (SIGTERM or Ctrl+C)
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal, initiating graceful shutdown...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, initiating graceful shutdown...");
        },
    }
}
