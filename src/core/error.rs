//! Typed error handling for the roster service
//!
//! Lookups that miss are not errors: they surface as `None` / `false`.
//! The types here cover the failures that remain, so callers can match on
//! them instead of inspecting strings.
//!
//! # Error Categories
//!
//! - [`StorageError`]: Errors raised by a store implementation
//! - [`ConfigError`]: Errors related to configuration loading and validation
//!
//! # Example
//!
//! ```rust,ignore
//! use roster::prelude::*;
//!
//! match service.get_student("1").await {
//!     Ok(Some(student)) => println!("Found: {}", student.name),
//!     Ok(None) => println!("No such student"),
//!     Err(RosterError::Storage(e)) => eprintln!("Store failure: {}", e),
//!     Err(e) => eprintln!("Other error: {}", e),
//! }
//! ```

use std::fmt;

/// Result alias used by the service layer
pub type RosterResult<T> = std::result::Result<T, RosterError>;

/// The main error type for the roster service
#[derive(Debug)]
pub enum RosterError {
    /// Storage backend errors
    Storage(StorageError),

    /// Configuration errors
    Config(ConfigError),

    /// Internal errors (should not happen in normal operation)
    Internal(String),
}

impl fmt::Display for RosterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RosterError::Storage(e) => write!(f, "{}", e),
            RosterError::Config(e) => write!(f, "{}", e),
            RosterError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for RosterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RosterError::Storage(e) => Some(e),
            RosterError::Config(e) => Some(e),
            RosterError::Internal(_) => None,
        }
    }
}

impl RosterError {
    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            RosterError::Storage(e) => e.error_code(),
            RosterError::Config(e) => e.error_code(),
            RosterError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

// =============================================================================
// Storage Errors
// =============================================================================

/// Errors related to the backing store
#[derive(Debug)]
pub enum StorageError {
    /// A writer panicked while holding the store lock
    LockPoisoned { operation: String },

    /// Store operation failed
    OperationFailed { operation: String, message: String },
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::LockPoisoned { operation } => {
                write!(f, "Store lock poisoned during {}", operation)
            }
            StorageError::OperationFailed { operation, message } => {
                write!(f, "Store {} failed: {}", operation, message)
            }
        }
    }
}

impl std::error::Error for StorageError {}

impl StorageError {
    pub fn error_code(&self) -> &'static str {
        match self {
            StorageError::LockPoisoned { .. } => "STORAGE_LOCK_POISONED",
            StorageError::OperationFailed { .. } => "STORAGE_OPERATION_FAILED",
        }
    }
}

impl From<StorageError> for RosterError {
    fn from(err: StorageError) -> Self {
        RosterError::Storage(err)
    }
}

// =============================================================================
// Config Errors
// =============================================================================

/// Errors related to configuration
#[derive(Debug)]
pub enum ConfigError {
    /// Config file could not be read
    Io { path: String, message: String },

    /// Config content is not valid YAML for the expected shape
    Parse { message: String },

    /// A field holds a value the server cannot use
    InvalidField { field: String, message: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io { path, message } => {
                write!(f, "Failed to read config file '{}': {}", path, message)
            }
            ConfigError::Parse { message } => write!(f, "Failed to parse config: {}", message),
            ConfigError::InvalidField { field, message } => {
                write!(f, "Invalid config field '{}': {}", field, message)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl ConfigError {
    pub fn error_code(&self) -> &'static str {
        match self {
            ConfigError::Io { .. } => "CONFIG_IO_ERROR",
            ConfigError::Parse { .. } => "CONFIG_PARSE_ERROR",
            ConfigError::InvalidField { .. } => "CONFIG_INVALID_FIELD",
        }
    }
}

impl From<ConfigError> for RosterError {
    fn from(err: ConfigError) -> Self {
        RosterError::Config(err)
    }
}
