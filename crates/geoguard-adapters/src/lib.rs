//! Infrastructure adapters for geoguard.
//!
//! This crate implements the ports defined in `geoguard-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod schema_loader;
pub mod source;

// Re-export commonly used adapters
pub use schema_loader::{SchemaLoader, parse_schema};
pub use source::{LocalSource, MemorySource};
