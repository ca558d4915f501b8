//! geoguard Core - GeoJSON validation for project location fields
//!
//! This crate provides the domain and application layers for geoguard,
//! following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          geoguard-cli (CLI)             │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │ (RecordValidationService, DocumentSvc)  │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │        (Driven: DocumentSource)         │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    geoguard-adapters (Infrastructure)   │
//! │  (LocalSource, MemorySource, schemas)   │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │  (Position, Ring, Geometry, Feature)    │
//! │            No I/O, no state             │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use geoguard_core::domain::is_valid_geojson;
//! use serde_json::json;
//!
//! let point = json!({"type": "Point", "coordinates": [12.5, 45.0]});
//! assert!(is_valid_geojson(Some(&point)));
//!
//! // Absent and null values pass: location fields are optional.
//! assert!(is_valid_geojson(None));
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        Document, DocumentReport, DocumentService, DocumentSource, Outcome, RecordSchema,
        RecordValidationService, Summary, ValidationFailure,
    };
    pub use crate::domain::{
        FieldRule, GeoJsonRule, GeometryType, RequiredRule, Violation, ViolationKind,
        check_geojson, is_valid_geojson,
    };
    pub use crate::error::{GeoGuardError, GeoGuardResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
