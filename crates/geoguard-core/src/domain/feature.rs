//! Feature and FeatureCollection envelopes.

use serde_json::Value;

use crate::domain::{
    error::{Violation, ViolationKind},
    geometry::check_geometry,
    path::JsonPath,
    shape::{each_element, expect_object, require_member},
    value_objects::GeoJsonType,
};

/// A Feature must carry a `geometry` member; `null` means "no location".
///
/// `properties` is not shape-checked.
pub fn check_feature(value: &Value, path: &JsonPath<'_>) -> Result<(), Violation> {
    let object = expect_object(value, path)?;
    let geometry = require_member(object, "geometry", path, ViolationKind::MissingGeometry)?;

    if geometry.is_null() {
        return Ok(());
    }
    check_geometry(geometry, &path.key("geometry"))
}

pub fn validate_feature(value: &Value) -> bool {
    check_feature(value, &JsonPath::root()).is_ok()
}

/// Every element of `features` must declare `"type": "Feature"` and be a
/// valid feature. An empty collection is valid.
pub fn check_feature_collection(value: &Value, path: &JsonPath<'_>) -> Result<(), Violation> {
    let object = expect_object(value, path)?;
    let features = require_member(object, "features", path, ViolationKind::MissingFeatures)?;

    each_element(features, &path.key("features"), |feature, feature_path| {
        let declared = feature.get("type").and_then(Value::as_str);
        if declared != Some(GeoJsonType::Feature.as_str()) {
            return Err(Violation::new(feature_path, ViolationKind::NotAFeature));
        }
        check_feature(feature, feature_path)
    })
}

pub fn validate_feature_collection(value: &Value) -> bool {
    check_feature_collection(value, &JsonPath::root()).is_ok()
}
