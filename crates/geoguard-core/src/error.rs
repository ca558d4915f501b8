//! Unified error handling for geoguard core.
//!
//! This module provides a unified error type that wraps record rejections
//! and application errors, with user-actionable suggestions.

use thiserror::Error;

use crate::application::{ApplicationError, ValidationFailure};

/// Root error type for geoguard core operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GeoGuardError {
    /// A record failed one or more field rules.
    #[error(transparent)]
    Rejected(#[from] ValidationFailure),

    /// Errors from the application layer (orchestration failures).
    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),

    /// Configuration or setup errors (e.g. an unreadable schema file).
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl GeoGuardError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Rejected(failure) => failure
                .errors
                .iter()
                .map(|e| format!("{}: {} ({})", e.field, e.message, e.violation))
                .collect(),
            Self::Application(e) => e.suggestions(),
            Self::Configuration { message } => vec![
                format!("Configuration issue: {}", message),
                "Check your setup and try again".into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Rejected(_) => ErrorCategory::Validation,
            Self::Application(e) => e.category(),
            Self::Configuration { .. } => ErrorCategory::Configuration,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Configuration,
    Internal,
}

/// Convenient result type alias.
pub type GeoGuardResult<T> = Result<T, GeoGuardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejections_are_validation_errors() {
        let failure = ValidationFailure::new(Vec::new());
        let err = GeoGuardError::from(failure);
        assert_eq!(err.category(), ErrorCategory::Validation);
    }

    #[test]
    fn application_category_is_forwarded() {
        let err: GeoGuardError = ApplicationError::DocumentNotFound { id: "x".into() }.into();
        assert_eq!(err.category(), ErrorCategory::NotFound);
    }

    #[test]
    fn configuration_errors_carry_their_message() {
        let err = GeoGuardError::Configuration {
            message: "schema.toml: missing".into(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert!(err.suggestions()[0].contains("schema.toml: missing"));
    }

    #[test]
    fn lock_errors_are_internal() {
        let err = GeoGuardError::from(ApplicationError::StoreLockError);
        assert_eq!(err.category(), ErrorCategory::Internal);
    }
}
