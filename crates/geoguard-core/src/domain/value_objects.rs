//! Value objects for the GeoJSON type vocabulary.
//!
//! Type tags are matched exactly: `"point"` or `"POINT"` are not geometry
//! tags, only `"Point"` is.

use std::{fmt, str::FromStr};

use serde::Serialize;

use crate::domain::error::ViolationKind;

// ============================================================================
// GeometryType
// ============================================================================

/// The seven base geometry kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum GeometryType {
    Point,
    LineString,
    Polygon,
    MultiPoint,
    MultiLineString,
    MultiPolygon,
    GeometryCollection,
}

impl GeometryType {
    pub const ALL: [GeometryType; 7] = [
        Self::Point,
        Self::LineString,
        Self::Polygon,
        Self::MultiPoint,
        Self::MultiLineString,
        Self::MultiPolygon,
        Self::GeometryCollection,
    ];

    /// The wire tag, as it appears in the `type` member.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Point => "Point",
            Self::LineString => "LineString",
            Self::Polygon => "Polygon",
            Self::MultiPoint => "MultiPoint",
            Self::MultiLineString => "MultiLineString",
            Self::MultiPolygon => "MultiPolygon",
            Self::GeometryCollection => "GeometryCollection",
        }
    }

    /// Name of the member holding this geometry's payload.
    pub const fn payload_member(self) -> &'static str {
        match self {
            Self::GeometryCollection => "geometries",
            _ => "coordinates",
        }
    }
}

impl fmt::Display for GeometryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GeometryType {
    type Err = ViolationKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| ViolationKind::UnknownType {
                type_name: s.to_owned(),
            })
    }
}

// ============================================================================
// GeoJsonType
// ============================================================================

/// Any top-level GeoJSON object type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeoJsonType {
    Geometry(GeometryType),
    Feature,
    FeatureCollection,
}

impl GeoJsonType {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Geometry(kind) => kind.as_str(),
            Self::Feature => "Feature",
            Self::FeatureCollection => "FeatureCollection",
        }
    }
}

impl fmt::Display for GeoJsonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GeoJsonType {
    type Err = ViolationKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Feature" => Ok(Self::Feature),
            "FeatureCollection" => Ok(Self::FeatureCollection),
            other => other.parse().map(Self::Geometry),
        }
    }
}

// ============================================================================
// JSON type names
// ============================================================================

/// Short name of a JSON value's type, used in diagnostics.
pub fn json_type_name(value: &serde_json::Value) -> &'static str {
    use serde_json::Value;

    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
