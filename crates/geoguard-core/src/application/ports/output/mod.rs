//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `geoguard-adapters` crate provides implementations.

use serde_json::Value;

use crate::error::GeoGuardResult;

/// A parsed JSON document and where it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: String,
    pub value: Value,
}

impl Document {
    pub fn new(id: impl Into<String>, value: Value) -> Self {
        Self {
            id: id.into(),
            value,
        }
    }
}

/// Port for reading documents to validate.
///
/// Implemented by:
/// - `geoguard_adapters::source::LocalSource` (files and directories)
/// - `geoguard_adapters::source::MemorySource` (testing, stdin)
///
/// ## Design Notes
///
/// - `list` returns identifiers in a stable order
/// - `load` parses; a document that is not JSON is an error, not a violation
#[cfg_attr(test, mockall::automock)]
pub trait DocumentSource: Send + Sync {
    /// Identifiers of every available document.
    fn list(&self) -> GeoGuardResult<Vec<String>>;

    /// Load and parse one document.
    fn load(&self, id: &str) -> GeoGuardResult<Document>;
}
