//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "validate a project record" or "check a batch
//! of boundary files".

pub mod document_service;
pub mod record_service;

pub use document_service::{DocumentReport, DocumentService, Outcome, Summary};
pub use record_service::{
    FieldError, PROJECT_LOCATION_FIELDS, RecordSchema, RecordValidationService, ValidationFailure,
};
