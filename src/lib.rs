//! # Roster
//!
//! A GraphQL API over two in-memory collections, students and courses,
//! joined by a many-to-many enrollment relation.
//!
//! ## Features
//!
//! - **Queries**: list, fetch by ID and search students by major (case-insensitive)
//! - **Mutations**: add, update and delete students and courses; enroll and unenroll
//! - **Relations**: `Student.courses` and `Course.students` resolved from the enrollment index
//! - **Stable IDs**: per-collection counters, never reused after deletion
//! - **Injected state**: the store is built by the server and handed to the schema,
//!   so every test can run against its own roster
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use roster::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     ServerBuilder::new()
//!         .with_config(ServerConfig::default())
//!         .with_roster_service(InMemoryRosterService::new())
//!         .serve()
//!         .await
//! }
//! ```

pub mod config;
pub mod core;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        ConfigError, Course, CoursePatch, EntityStore, NewCourse, NewStudent, RosterError,
        RosterResult, RosterService, StorageError, Student, StudentPatch,
    };

    // === Storage ===
    pub use crate::storage::{InMemoryRosterService, populate_demo_data};

    // === Config ===
    pub use crate::config::ServerConfig;

    // === Server ===
    pub use crate::server::exposure::graphql::{RosterSchema, build_schema};
    pub use crate::server::{GraphQLExposure, RestExposure, ServerBuilder, ServerHost};
}
