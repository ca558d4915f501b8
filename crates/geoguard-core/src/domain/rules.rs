//! Field-level rules.
//!
//! A host validation framework calls a [`FieldRule`] with the candidate
//! value of one record field; on failure it attaches [`FieldRule::message`]
//! to that field. Rules know nothing about how errors are aggregated.

use std::fmt;

use serde_json::Value;

use crate::domain::{
    error::{Violation, ViolationKind},
    path::JsonPath,
    validation::check_geojson,
};

/// A reusable property-level check.
pub trait FieldRule: Send + Sync + fmt::Debug {
    /// Stable identifier, reported as the failed constraint.
    fn name(&self) -> &'static str;

    /// Fixed, user-facing message attached to a failing field.
    fn message(&self) -> &'static str;

    /// Diagnose the value. `None` means the field is absent.
    fn check(&self, value: Option<&Value>) -> Result<(), Violation>;

    fn validate(&self, value: Option<&Value>) -> bool {
        self.check(value).is_ok()
    }
}

/// Optional GeoJSON field: absent or null passes, anything else must be a
/// valid Geometry, Feature or FeatureCollection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GeoJsonRule;

impl FieldRule for GeoJsonRule {
    fn name(&self) -> &'static str {
        "isValidGeoJSON"
    }

    fn message(&self) -> &'static str {
        "Invalid GeoJSON format"
    }

    fn check(&self, value: Option<&Value>) -> Result<(), Violation> {
        check_geojson(value)
    }
}

/// Rejects absent and null values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequiredRule;

impl FieldRule for RequiredRule {
    fn name(&self) -> &'static str {
        "isDefined"
    }

    fn message(&self) -> &'static str {
        "Field is required"
    }

    fn check(&self, value: Option<&Value>) -> Result<(), Violation> {
        match value {
            None | Some(Value::Null) => {
                Err(Violation::new(&JsonPath::root(), ViolationKind::Required))
            }
            Some(_) => Ok(()),
        }
    }
}

/// Names accepted by [`rule_by_name`], e.g. in schema files.
pub const RULE_NAMES: [&str; 2] = ["geojson", "required"];

/// Look up a built-in rule by its schema name.
pub fn rule_by_name(name: &str) -> Option<Box<dyn FieldRule>> {
    match name {
        "geojson" => Some(Box::new(GeoJsonRule)),
        "required" => Some(Box::new(RequiredRule)),
        _ => None,
    }
}
