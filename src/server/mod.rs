//! Server module: host state, protocol exposures and the builder that wires them

pub mod builder;
pub mod exposure;
pub mod host;

pub use builder::ServerBuilder;
pub use exposure::{GraphQLExposure, RestExposure};
pub use host::ServerHost;
