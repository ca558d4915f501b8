//! Core domain layer for geoguard.
//!
//! This module contains the GeoJSON structural validator: pure, synchronous
//! predicates over `serde_json::Value` trees.
//!
//! ## Layout (leaf to root)
//!
//! - **position**: single `[lng, lat, alt?]` tuples
//! - **ring**: line-like sequences and closed polygon rings
//! - **geometry**: dispatch over the seven geometry types
//! - **feature**: Feature / FeatureCollection envelopes
//! - **validation**: the optional-field entry point
//!
//! Every `validate_*` predicate has a `check_*` twin that reports the first
//! [`Violation`]; the predicate is defined as `check(..).is_ok()`.
//!
//! ## Guarantees
//!
//! - **No I/O**: no filesystem, network, or shared state
//! - **Reentrant**: safe to call from any number of threads at once
//! - **Never panics to the caller**: the entry point fails closed

pub mod error;
pub mod feature;
pub mod geometry;
pub mod path;
pub mod position;
pub mod ring;
pub mod rules;
pub mod value_objects;

mod shape;
mod validation;

// Re-exports for convenience
pub use error::{Violation, ViolationKind};
pub use feature::{
    check_feature, check_feature_collection, validate_feature, validate_feature_collection,
};
pub use geometry::{check_geometry, validate_geometry};
pub use path::JsonPath;
pub use position::{CLOSURE_TOLERANCE, Position, check_position, validate_position};
pub use ring::{check_line_like, check_ring, validate_line_like, validate_ring};
pub use rules::{FieldRule, GeoJsonRule, RequiredRule, rule_by_name};
pub use validation::{check_geojson, is_valid_geojson};
pub use value_objects::{GeoJsonType, GeometryType, json_type_name};
