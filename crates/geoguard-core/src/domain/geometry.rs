//! Geometry dispatch.
//!
//! Each of the seven [`GeometryType`]s maps to one coordinate-shape rule.
//! `GeometryCollection` recurses into its `geometries`; nesting depth is
//! bounded only by the input itself.

use serde_json::Value;

use crate::domain::{
    error::{Violation, ViolationKind},
    path::JsonPath,
    position::check_position,
    ring::{MIN_LINE_POSITIONS, check_line_like, check_polygon_rings},
    shape::{each_element, expect_object, require_member, type_tag},
    value_objects::GeometryType,
};

/// Check that `value` is a GeoJSON geometry object.
pub fn check_geometry(value: &Value, path: &JsonPath<'_>) -> Result<(), Violation> {
    let object = expect_object(value, path)?;
    let kind = type_tag(object, path)?
        .parse::<GeometryType>()
        .map_err(|kind| Violation::new(path, kind))?;

    let member = kind.payload_member();
    let payload_path = path.key(member);
    let missing = match kind {
        GeometryType::GeometryCollection => ViolationKind::MissingGeometries,
        _ => ViolationKind::MissingCoordinates,
    };
    let payload = require_member(object, member, path, missing)?;

    check_payload(kind, payload, &payload_path)
}

/// `true` when `value` is a valid geometry object.
pub fn validate_geometry(value: &Value) -> bool {
    check_geometry(value, &JsonPath::root()).is_ok()
}

fn check_payload(kind: GeometryType, payload: &Value, path: &JsonPath<'_>) -> Result<(), Violation> {
    match kind {
        GeometryType::Point => check_position(payload, path).map(drop),
        GeometryType::LineString => check_line_like(payload, MIN_LINE_POSITIONS, path),
        GeometryType::Polygon => check_polygon_rings(payload, path),
        GeometryType::MultiPoint => check_line_like(payload, 0, path),
        GeometryType::MultiLineString => each_element(payload, path, |line, line_path| {
            check_line_like(line, MIN_LINE_POSITIONS, line_path)
        }),
        GeometryType::MultiPolygon => each_element(payload, path, check_polygon_rings),
        GeometryType::GeometryCollection => each_element(payload, path, check_geometry),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn kind_of(value: Value) -> ViolationKind {
        check_geometry(&value, &JsonPath::root()).unwrap_err().kind
    }

    // ========================================================================
    // Envelope
    // ========================================================================

    #[test]
    fn rejects_non_objects() {
        assert!(!validate_geometry(&json!(null)));
        assert!(!validate_geometry(&json!([0, 0])));
        assert!(!validate_geometry(&json!("Point")));
    }

    #[test]
    fn rejects_missing_or_non_string_type() {
        assert_eq!(kind_of(json!({"coordinates": [0, 0]})), ViolationKind::MissingType);
        assert_eq!(
            kind_of(json!({"type": 1, "coordinates": [0, 0]})),
            ViolationKind::MissingType
        );
    }

    #[test]
    fn rejects_unknown_and_miscased_types() {
        assert!(!validate_geometry(&json!({"type": "point", "coordinates": [0, 0]})));
        assert!(!validate_geometry(&json!({"type": "Circle", "coordinates": [0, 0]})));
        assert!(!validate_geometry(&json!({"type": "Feature", "geometry": null})));
    }

    #[test]
    fn rejects_missing_coordinates() {
        assert_eq!(kind_of(json!({"type": "Point"})), ViolationKind::MissingCoordinates);
    }

    // ========================================================================
    // Per-type rules
    // ========================================================================

    #[test]
    fn point() {
        assert!(validate_geometry(&json!({"type": "Point", "coordinates": [12.5, 45.0]})));
        assert!(!validate_geometry(&json!({"type": "Point", "coordinates": [200, 45.0]})));
        assert!(!validate_geometry(&json!({"type": "Point", "coordinates": [[0, 0]]})));
    }

    #[test]
    fn line_string() {
        assert!(validate_geometry(&json!({
            "type": "LineString", "coordinates": [[0, 0], [1, 1]]
        })));
        assert_eq!(
            kind_of(json!({"type": "LineString", "coordinates": [[0, 0]]})),
            ViolationKind::TooFewPositions { min: 2, found: 1 }
        );
    }

    #[test]
    fn polygon() {
        assert!(validate_geometry(&json!({
            "type": "Polygon", "coordinates": [[[0, 0], [1, 0], [1, 1], [0, 0]]]
        })));
        assert!(!validate_geometry(&json!({
            "type": "Polygon", "coordinates": [[[0, 0], [1, 0], [1, 1], [0, 1]]]
        })));
        assert_eq!(
            kind_of(json!({"type": "Polygon", "coordinates": []})),
            ViolationKind::NoRings
        );
    }

    #[test]
    fn multi_point_has_no_minimum() {
        assert!(validate_geometry(&json!({"type": "MultiPoint", "coordinates": []})));
        assert!(validate_geometry(&json!({
            "type": "MultiPoint", "coordinates": [[0, 0], [1, 1], [2, 2]]
        })));
        assert!(!validate_geometry(&json!({
            "type": "MultiPoint", "coordinates": [[0, 0], [0, -91]]
        })));
    }

    #[test]
    fn multi_line_string() {
        assert!(validate_geometry(&json!({"type": "MultiLineString", "coordinates": []})));
        assert!(validate_geometry(&json!({
            "type": "MultiLineString", "coordinates": [[[0, 0], [1, 1]], [[2, 2], [3, 3]]]
        })));
        assert!(!validate_geometry(&json!({
            "type": "MultiLineString", "coordinates": [[[0, 0], [1, 1]], [[2, 2]]]
        })));
    }

    #[test]
    fn multi_polygon() {
        let square = json!([[[0, 0], [1, 0], [1, 1], [0, 1], [0, 0]]]);
        assert!(validate_geometry(&json!({"type": "MultiPolygon", "coordinates": [square]})));
        assert!(validate_geometry(&json!({"type": "MultiPolygon", "coordinates": []})));
        assert!(!validate_geometry(&json!({"type": "MultiPolygon", "coordinates": [[]]})));
        assert!(!validate_geometry(&json!({
            "type": "MultiPolygon", "coordinates": [square, [[[0, 0], [1, 0], [0, 0]]]]
        })));
    }

    #[test]
    fn geometry_collection_recurses() {
        assert!(validate_geometry(&json!({
            "type": "GeometryCollection",
            "geometries": [
                {"type": "Point", "coordinates": [0, 0]},
                {"type": "GeometryCollection", "geometries": [
                    {"type": "LineString", "coordinates": [[0, 0], [1, 1]]}
                ]}
            ]
        })));
        assert!(validate_geometry(&json!({"type": "GeometryCollection", "geometries": []})));
    }

    #[test]
    fn geometry_collection_needs_geometries_not_coordinates() {
        assert_eq!(
            kind_of(json!({"type": "GeometryCollection", "coordinates": []})),
            ViolationKind::MissingGeometries
        );
    }

    #[test]
    fn invalid_member_fails_whole_collection() {
        let err = check_geometry(
            &json!({
                "type": "GeometryCollection",
                "geometries": [
                    {"type": "Point", "coordinates": [0, 0]},
                    {"type": "Point", "coordinates": [999, 0]}
                ]
            }),
            &JsonPath::root(),
        )
        .unwrap_err();
        assert_eq!(err.path, "$.geometries[1].coordinates[0]");
        assert_eq!(err.kind, ViolationKind::LongitudeOutOfRange { value: 999.0 });
    }

    #[test]
    fn deeply_nested_collections_are_walked() {
        let mut value = json!({"type": "Point", "coordinates": [1, 1]});
        for _ in 0..50 {
            value = json!({"type": "GeometryCollection", "geometries": [value]});
        }
        assert!(validate_geometry(&value));
    }
}
