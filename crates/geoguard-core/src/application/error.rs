//! Application layer errors.
//!
//! These errors represent failures in orchestration (loading documents,
//! interpreting records), not shape violations. Shape violations are
//! `Violation` from `crate::domain`.

use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApplicationError {
    /// A record to validate was not a JSON object.
    #[error("Expected a record object, found {found}")]
    NotARecord { found: &'static str },

    /// A document could not be read from its source.
    #[error("Cannot read document '{id}': {reason}")]
    SourceUnavailable { id: String, reason: String },

    /// A document was read but is not JSON.
    #[error("Document '{id}' is not valid JSON: {reason}")]
    MalformedDocument { id: String, reason: String },

    /// No document with this identifier exists in the source.
    #[error("Document not found: {id}")]
    DocumentNotFound { id: String },

    /// Source access failed (lock poisoned, etc.).
    #[error("Document source error")]
    StoreLockError,

    /// A schema referenced a rule that does not exist.
    #[error("Unknown rule '{name}' for field '{field}'")]
    UnknownRule { field: String, name: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::NotARecord { found } => vec![
                format!("Got a JSON {found}"),
                "Records must be JSON objects keyed by field name".into(),
            ],
            Self::SourceUnavailable { id, .. } => vec![
                format!("Failed to access: {id}"),
                "Check that the file exists and is readable".into(),
            ],
            Self::MalformedDocument { id, .. } => vec![
                format!("'{id}' could not be parsed"),
                "Check the file with a JSON linter".into(),
            ],
            Self::DocumentNotFound { id } => vec![format!("No document named '{id}'")],
            Self::StoreLockError => vec![
                "The document source is locked".into(),
                "Try again in a moment".into(),
            ],
            Self::UnknownRule { name, .. } => vec![
                format!("'{name}' is not a known rule"),
                format!(
                    "Available rules: {}",
                    crate::domain::rules::RULE_NAMES.join(", ")
                ),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::NotARecord { .. } | Self::MalformedDocument { .. } => ErrorCategory::Validation,
            Self::SourceUnavailable { .. } | Self::StoreLockError => ErrorCategory::Internal,
            Self::DocumentNotFound { .. } => ErrorCategory::NotFound,
            Self::UnknownRule { .. } => ErrorCategory::Configuration,
        }
    }
}
