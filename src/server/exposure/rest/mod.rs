//! REST exposure: health checks
//!
//! The roster itself is only reachable through GraphQL. This router carries
//! the liveness endpoints plus any custom routes handed to the builder.

use super::super::host::ServerHost;
use anyhow::Result;
use axum::{Json, Router, extract::Extension, http::StatusCode, routing::get};
use serde_json::{Value, json};
use std::sync::Arc;

/// REST API exposure implementation
pub struct RestExposure;

impl RestExposure {
    /// Build the REST router from a host
    ///
    /// # Arguments
    ///
    /// * `host` - The server host containing all server state
    /// * `custom_routes` - Additional custom routes to merge
    pub fn build_router(host: Arc<ServerHost>, custom_routes: Vec<Router>) -> Result<Router> {
        let mut app = Router::new()
            .route("/health", get(Self::health_check))
            .route("/healthz", get(Self::health_check))
            .layer(Extension(host));

        for custom_router in custom_routes {
            app = app.merge(custom_router);
        }

        Ok(app)
    }

    /// Health check endpoint handler
    ///
    /// Reports `degraded` with a 503 when the store cannot be read.
    async fn health_check(Extension(host): Extension<Arc<ServerHost>>) -> (StatusCode, Json<Value>) {
        match host.roster.list_courses().await {
            Ok(_) => (
                StatusCode::OK,
                Json(json!({
                    "status": "ok",
                    "service": "roster"
                })),
            ),
            Err(e) => {
                tracing::warn!(error = %e, "Health check failed");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    Json(json!({
                        "status": "degraded",
                        "service": "roster",
                        "code": e.error_code()
                    })),
                )
            }
        }
    }
}
