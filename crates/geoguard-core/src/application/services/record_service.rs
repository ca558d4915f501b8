//! Record Validation Service - field-level validation of whole records.
//!
//! A record is a JSON object keyed by field name (a project, a site). Each
//! field in the [`RecordSchema`] is run through its rules and every failure
//! is collected into one [`ValidationFailure`], so a client sees all bad
//! fields at once. Any failure rejects the record.

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, instrument};

use crate::{
    application::ApplicationError,
    domain::{FieldRule, GeoJsonRule, Violation, json_type_name},
    error::GeoGuardResult,
};

/// Field names on the backend's project record that hold GeoJSON.
pub const PROJECT_LOCATION_FIELDS: [&str; 2] = ["location", "site_boundary"];

// ============================================================================
// Schema
// ============================================================================

#[derive(Debug)]
struct FieldSpec {
    name: String,
    rules: Vec<Box<dyn FieldRule>>,
}

/// Ordered mapping of field name to the rules applied to it.
#[derive(Debug, Default)]
pub struct RecordSchema {
    fields: Vec<FieldSpec>,
}

impl RecordSchema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schema for project records: every location field is optional GeoJSON.
    pub fn project_default() -> Self {
        PROJECT_LOCATION_FIELDS
            .into_iter()
            .fold(Self::new(), |schema, field| schema.with_rule(field, GeoJsonRule))
    }

    /// Append a rule to a field, creating the field on first use.
    pub fn with_rule(self, field: impl Into<String>, rule: impl FieldRule + 'static) -> Self {
        self.with_boxed_rule(field, Box::new(rule))
    }

    pub fn with_boxed_rule(mut self, field: impl Into<String>, rule: Box<dyn FieldRule>) -> Self {
        let field = field.into();
        match self.fields.iter_mut().find(|spec| spec.name == field) {
            Some(spec) => spec.rules.push(rule),
            None => self.fields.push(FieldSpec {
                name: field,
                rules: vec![rule],
            }),
        }
        self
    }

    /// Field names in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|spec| spec.name.as_str())
    }

    /// Rule names applied to `field`, in order.
    pub fn rules_for(&self, field: &str) -> Vec<&'static str> {
        self.fields
            .iter()
            .find(|spec| spec.name == field)
            .map(|spec| spec.rules.iter().map(|rule| rule.name()).collect())
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

// ============================================================================
// Failure DTOs
// ============================================================================

/// One failed rule on one field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub constraint: &'static str,
    pub message: &'static str,
    pub violation: Violation,
}

/// Aggregated rejection of a record, shaped like the backend's 400 response.
#[derive(Debug, Clone, PartialEq, Serialize, Error)]
#[serde(rename_all = "camelCase")]
#[error("Validation failed: {} field error(s)", .errors.len())]
pub struct ValidationFailure {
    pub status_code: u16,
    pub message: String,
    pub errors: Vec<FieldError>,
}

impl ValidationFailure {
    pub fn new(errors: Vec<FieldError>) -> Self {
        Self {
            status_code: 400,
            message: "Validation failed".into(),
            errors,
        }
    }

    /// Names of the fields that failed, deduplicated, in schema order.
    pub fn fields(&self) -> Vec<&str> {
        let mut fields: Vec<&str> = Vec::new();
        for error in &self.errors {
            if !fields.contains(&error.field.as_str()) {
                fields.push(&error.field);
            }
        }
        fields
    }
}

// ============================================================================
// Service
// ============================================================================

/// Validates records against a schema.
#[derive(Debug)]
pub struct RecordValidationService {
    schema: RecordSchema,
}

impl RecordValidationService {
    pub fn new(schema: RecordSchema) -> Self {
        Self { schema }
    }

    pub fn schema(&self) -> &RecordSchema {
        &self.schema
    }

    /// Validate one record.
    ///
    /// Returns `GeoGuardError::Rejected` carrying every field error, or
    /// `ApplicationError::NotARecord` if `record` is not an object.
    #[instrument(skip_all, fields(fields = self.schema.len()))]
    pub fn validate_record(&self, record: &Value) -> GeoGuardResult<()> {
        let object = record.as_object().ok_or(ApplicationError::NotARecord {
            found: json_type_name(record),
        })?;

        let errors: Vec<FieldError> = self
            .schema
            .fields
            .iter()
            .flat_map(|spec| {
                let value = object.get(&spec.name);
                spec.rules.iter().filter_map(move |rule| {
                    rule.check(value).err().map(|violation| FieldError {
                        field: spec.name.clone(),
                        constraint: rule.name(),
                        message: rule.message(),
                        violation,
                    })
                })
            })
            .collect();

        if errors.is_empty() {
            debug!("Record accepted");
            return Ok(());
        }

        debug!(errors = errors.len(), "Record rejected");
        Err(ValidationFailure::new(errors).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{domain::RequiredRule, error::GeoGuardError};
    use serde_json::json;

    fn rejected(result: GeoGuardResult<()>) -> ValidationFailure {
        match result {
            Err(GeoGuardError::Rejected(failure)) => failure,
            other => panic!("expected rejection, got {other:?}"),
        }
    }

    #[test]
    fn default_schema_covers_location_fields() {
        let schema = RecordSchema::project_default();
        assert_eq!(schema.fields().collect::<Vec<_>>(), PROJECT_LOCATION_FIELDS);
        assert_eq!(schema.rules_for("location"), vec!["isValidGeoJSON"]);
    }

    #[test]
    fn rules_accumulate_per_field() {
        let schema = RecordSchema::new()
            .with_rule("boundary", RequiredRule)
            .with_rule("boundary", GeoJsonRule);
        assert_eq!(schema.len(), 1);
        assert_eq!(schema.rules_for("boundary"), vec!["isDefined", "isValidGeoJSON"]);
        assert!(schema.rules_for("missing").is_empty());
    }

    #[test]
    fn record_without_location_is_accepted() {
        let service = RecordValidationService::new(RecordSchema::project_default());
        assert!(service.validate_record(&json!({"name": "Kijabe restoration"})).is_ok());
    }

    #[test]
    fn valid_location_is_accepted() {
        let service = RecordValidationService::new(RecordSchema::project_default());
        let record = json!({
            "name": "Kijabe restoration",
            "location": {"type": "Point", "coordinates": [36.57, -0.93]},
            "site_boundary": null
        });
        assert!(service.validate_record(&record).is_ok());
    }

    #[test]
    fn every_bad_field_is_reported() {
        let service = RecordValidationService::new(RecordSchema::project_default());
        let record = json!({
            "location": {"type": "Point", "coordinates": [200, 0]},
            "site_boundary": {"type": "Polygon", "coordinates": [[[0, 0], [1, 0], [1, 1], [0, 1]]]}
        });

        let failure = rejected(service.validate_record(&record));
        assert_eq!(failure.status_code, 400);
        assert_eq!(failure.fields(), vec!["location", "site_boundary"]);
        assert!(
            failure
                .errors
                .iter()
                .all(|e| e.message == "Invalid GeoJSON format")
        );
    }

    #[test]
    fn required_and_geojson_combine() {
        let schema = RecordSchema::new()
            .with_rule("site_boundary", RequiredRule)
            .with_rule("site_boundary", GeoJsonRule);
        let service = RecordValidationService::new(schema);

        let failure = rejected(service.validate_record(&json!({})));
        assert_eq!(failure.errors.len(), 1);
        assert_eq!(failure.errors[0].constraint, "isDefined");
    }

    #[test]
    fn non_object_record_is_an_application_error() {
        let service = RecordValidationService::new(RecordSchema::project_default());
        let err = service.validate_record(&json!([1, 2])).unwrap_err();
        assert!(matches!(
            err,
            GeoGuardError::Application(ApplicationError::NotARecord { found: "array" })
        ));
    }

    #[test]
    fn failure_serialises_in_response_shape() {
        let service = RecordValidationService::new(RecordSchema::project_default());
        let failure = rejected(service.validate_record(&json!({"location": "here"})));

        let body = serde_json::to_value(&failure).unwrap();
        assert_eq!(body["statusCode"], 400);
        assert_eq!(body["message"], "Validation failed");
        assert_eq!(body["errors"][0]["field"], "location");
        assert_eq!(body["errors"][0]["constraint"], "isValidGeoJSON");
        assert_eq!(body["errors"][0]["violation"]["rule"], "not_an_object");
        assert_eq!(body["errors"][0]["violation"]["path"], "$");
    }
}
