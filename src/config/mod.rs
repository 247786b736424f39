//! Configuration loading and management

use crate::core::ConfigError;
use serde::{Deserialize, Serialize};

/// Server configuration
///
/// Every field has a default, so an empty YAML document is a valid config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address the HTTP listener binds to
    pub bind_address: String,

    /// Path of the GraphQL endpoint (playground and SDL hang below it)
    pub graphql_path: String,

    /// Serve the GraphQL playground UI
    pub playground: bool,

    /// Load the demo students, courses and enrollments at startup
    pub seed_demo_data: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:5000".to_string(),
            graphql_path: "/graphql".to_string(),
            playground: true,
            seed_demo_data: true,
        }
    }
}

impl ServerConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        Self::from_yaml_str(&content)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        // serde_yaml reads an empty document as null, not as an empty map
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(yaml).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the values can actually be served
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bind_address.trim().is_empty() {
            return Err(ConfigError::InvalidField {
                field: "bind_address".to_string(),
                message: "must not be empty".to_string(),
            });
        }

        if !self.graphql_path.starts_with('/') || self.graphql_path.len() < 2 {
            return Err(ConfigError::InvalidField {
                field: "graphql_path".to_string(),
                message: format!("'{}' must start with '/' and name a route", self.graphql_path),
            });
        }

        if self.graphql_path.ends_with('/') {
            return Err(ConfigError::InvalidField {
                field: "graphql_path".to_string(),
                message: "must not end with '/'".to_string(),
            });
        }

        Ok(())
    }

    /// Path of the playground UI
    pub fn playground_path(&self) -> String {
        format!("{}/playground", self.graphql_path)
    }

    /// Path of the SDL export
    pub fn schema_path(&self) -> String {
        format!("{}/schema", self.graphql_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ServerConfig::default();

        assert_eq!(config.bind_address, "0.0.0.0:5000");
        assert_eq!(config.graphql_path, "/graphql");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_yaml_serialization() {
        let config = ServerConfig::default();
        let yaml = serde_yaml::to_string(&config).unwrap();

        let parsed = ServerConfig::from_yaml_str(&yaml).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config = ServerConfig::from_yaml_str("playground: false\n").unwrap();

        assert!(!config.playground);
        assert_eq!(config.graphql_path, "/graphql");
        assert!(config.seed_demo_data);
    }

    #[test]
    fn test_empty_yaml_is_default() {
        assert_eq!(
            ServerConfig::from_yaml_str("").unwrap(),
            ServerConfig::default()
        );
    }

    #[test]
    fn test_invalid_path_rejected() {
        let err = ServerConfig::from_yaml_str("graphql_path: graphql\n").unwrap_err();
        assert_eq!(err.error_code(), "CONFIG_INVALID_FIELD");

        let err = ServerConfig::from_yaml_str("graphql_path: /api/\n").unwrap_err();
        assert_eq!(err.error_code(), "CONFIG_INVALID_FIELD");
    }

    #[test]
    fn test_malformed_yaml_rejected() {
        let err = ServerConfig::from_yaml_str("playground: [not a bool").unwrap_err();
        assert_eq!(err.error_code(), "CONFIG_PARSE_ERROR");
    }

    #[test]
    fn test_derived_paths() {
        let config = ServerConfig {
            graphql_path: "/api/graphql".to_string(),
            ..Default::default()
        };
        assert_eq!(config.playground_path(), "/api/graphql/playground");
        assert_eq!(config.schema_path(), "/api/graphql/schema");
    }
}
