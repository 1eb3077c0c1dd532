//! Infrastructure layer for courselib
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer: the in-memory repository, configuration
//! file loading, and the sample-data seed.

pub mod config;
pub mod repository;
pub mod seed;

// Re-export commonly used types
pub use config::{ConfigLoader, FileConfig, FileLogConfig, FileSeedConfig, FileServerConfig};
pub use repository::InMemoryCourseLibrary;
pub use seed::seed_sample_data;
