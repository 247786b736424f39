//! Server host for transport-agnostic API exposure
//!
//! The `ServerHost` owns the state every exposure needs: the configuration
//! and the roster service. It is created once by the builder at startup and
//! dropped when the server shuts down.

use crate::config::ServerConfig;
use crate::core::RosterService;
use std::sync::Arc;

/// Host context containing all server state
///
/// # Example
///
/// ```rust,ignore
/// let host = Arc::new(ServerHost::new(config, Arc::new(InMemoryRosterService::new())));
/// let graphql_app = GraphQLExposure::build_router(host.clone())?;
/// let rest_app = RestExposure::build_router(host)?;
/// ```
pub struct ServerHost {
    /// Server configuration
    pub config: Arc<ServerConfig>,

    /// Roster service shared by every resolver
    pub roster: Arc<dyn RosterService>,
}

impl ServerHost {
    pub fn new(config: ServerConfig, roster: Arc<dyn RosterService>) -> Self {
        Self {
            config: Arc::new(config),
            roster,
        }
    }
}
