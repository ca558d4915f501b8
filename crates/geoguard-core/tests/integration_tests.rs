//! Integration tests for geoguard-core's public API.

use geoguard_core::{
    application::{ApplicationError, ports::*},
    error::{GeoGuardError, GeoGuardResult},
    prelude::*,
};
use serde_json::{Value, json};

/// Minimal source over a fixed list of documents.
struct FixtureSource(Vec<(&'static str, Value)>);

impl DocumentSource for FixtureSource {
    fn list(&self) -> GeoGuardResult<Vec<String>> {
        Ok(self.0.iter().map(|(id, _)| id.to_string()).collect())
    }

    fn load(&self, id: &str) -> GeoGuardResult<Document> {
        self.0
            .iter()
            .find(|(candidate, _)| *candidate == id)
            .map(|(id, value)| Document::new(*id, value.clone()))
            .ok_or_else(|| ApplicationError::DocumentNotFound { id: id.into() }.into())
    }
}

fn nursery_site() -> Value {
    json!({
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "properties": {"name": "Nursery"},
                "geometry": {"type": "Point", "coordinates": [36.8219, -1.2921, 1795.0]}
            },
            {
                "type": "Feature",
                "properties": {"name": "Planting block A"},
                "geometry": {
                    "type": "Polygon",
                    "coordinates": [[
                        [36.80, -1.30], [36.82, -1.30], [36.82, -1.28], [36.80, -1.28], [36.80, -1.30]
                    ]]
                }
            },
            {
                "type": "Feature",
                "properties": {"name": "Unsurveyed"},
                "geometry": null
            }
        ]
    })
}

#[test]
fn test_realistic_site_collection_is_valid() {
    assert!(is_valid_geojson(Some(&nursery_site())));
}

#[test]
fn test_swapped_lat_lng_is_reported_with_location() {
    let mut site = nursery_site();
    site["features"][0]["geometry"]["coordinates"] = json!([-1.2921, 136.8219]);

    let violation = check_geojson(Some(&site)).unwrap_err();
    assert_eq!(violation.path, "$.features[0].geometry.coordinates[1]");
    assert_eq!(
        violation.kind,
        ViolationKind::LatitudeOutOfRange { value: 136.8219 }
    );
}

#[test]
fn test_document_service_over_custom_source() {
    let source = FixtureSource(vec![
        ("site.geojson", nursery_site()),
        ("bad.geojson", json!({"type": "Polygon", "coordinates": [[[0, 0], [1, 1], [0, 0]]]})),
        ("empty.geojson", json!({"type": "FeatureCollection", "features": []})),
    ]);

    let reports = DocumentService::new(Box::new(source)).validate_all().unwrap();
    let summary = Summary::from_reports(&reports);

    assert_eq!(summary.total, 3);
    assert_eq!(summary.valid, 2);
    assert_eq!(summary.invalid, 1);
    assert_eq!(reports[1].id, "bad.geojson");
    assert!(!reports[1].outcome.is_valid());
}

#[test]
fn test_record_service_rejects_all_bad_fields_at_once() {
    let service = RecordValidationService::new(
        RecordSchema::project_default().with_rule("site_boundary", RequiredRule),
    );

    let record = json!({
        "name": "Mau forest restoration",
        "location": {"type": "Point", "coordinates": [35.7, -0.6, "high"]}
    });

    match service.validate_record(&record) {
        Err(GeoGuardError::Rejected(failure)) => {
            assert_eq!(failure.fields(), vec!["location", "site_boundary"]);
            assert_eq!(failure.errors[0].violation.kind, ViolationKind::AltitudeNotNumeric);
            assert_eq!(failure.errors[1].message, "Field is required");
        }
        other => panic!("expected rejection, got {other:?}"),
    }
}

#[test]
fn test_field_rule_as_trait_object() {
    let rules: Vec<Box<dyn FieldRule>> = vec![Box::new(GeoJsonRule), Box::new(RequiredRule)];
    let value = json!({"type": "MultiPoint", "coordinates": []});

    assert!(rules.iter().all(|rule| rule.validate(Some(&value))));
    assert!(!rules.iter().all(|rule| rule.validate(None)));
}
