//! Application layer for geoguard.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (RecordValidationService, DocumentService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! validation rules itself. All shape rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    DocumentReport, DocumentService, FieldError, Outcome, RecordSchema, RecordValidationService,
    Summary, ValidationFailure,
};

// Re-export port traits (for adapter implementation)
pub use ports::{Document, DocumentSource};

pub use error::ApplicationError;
