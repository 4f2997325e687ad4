//! Main library crate for the modelcat exporter

// Re-export the main modules needed for integration tests
pub mod config;
pub mod credential;
pub mod export;
pub mod normalize;
pub mod observability;
pub mod probe;
pub mod sources;

// Re-export commonly used types
pub use modelcat_core::domain::ModelRow;
