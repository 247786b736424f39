//! Storage implementations for the roster service

pub mod in_memory;
pub mod seed;

pub use in_memory::InMemoryRosterService;
pub use seed::populate_demo_data;
