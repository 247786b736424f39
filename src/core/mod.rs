//! Core module containing the roster data model, store and service trait

pub mod error;
pub mod model;
pub mod service;
pub mod store;

pub use error::{ConfigError, RosterError, RosterResult, StorageError};
pub use model::{Course, CoursePatch, NewCourse, NewStudent, Student, StudentPatch};
pub use service::RosterService;
pub use store::{EntityStore, IdAllocator};
