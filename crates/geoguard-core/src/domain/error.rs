// ============================================================================
// domain/error.rs - SHAPE VIOLATIONS
// ============================================================================

use serde::Serialize;
use thiserror::Error;

use crate::domain::path::JsonPath;

/// The first rule a GeoJSON value broke.
///
/// Violations are:
/// - Located (`path` points at the offending member)
/// - Serialisable (reports can be emitted as JSON)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq, Serialize)]
#[error("{path}: {kind}")]
pub struct Violation {
    pub path: String,
    #[serde(flatten)]
    pub kind: ViolationKind,
}

impl Violation {
    pub fn new(path: &JsonPath<'_>, kind: ViolationKind) -> Self {
        Self {
            path: path.to_string(),
            kind,
        }
    }

    pub fn suggestions(&self) -> Vec<String> {
        self.kind.suggestions()
    }
}

/// Every structural rule the validator enforces.
#[derive(Debug, Error, Clone, PartialEq, Serialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum ViolationKind {
    // ========================================================================
    // Envelope
    // ========================================================================
    #[error("expected an object, found {found}")]
    NotAnObject { found: &'static str },

    #[error("missing string member 'type'")]
    MissingType,

    #[error("unrecognised GeoJSON type '{type_name}'")]
    UnknownType { type_name: String },

    #[error("expected an array, found {found}")]
    NotAnArray { found: &'static str },

    #[error("missing member 'coordinates'")]
    MissingCoordinates,

    #[error("missing member 'geometries'")]
    MissingGeometries,

    #[error("missing member 'geometry'")]
    MissingGeometry,

    #[error("missing member 'features'")]
    MissingFeatures,

    #[error("feature collection member is not a Feature")]
    NotAFeature,

    #[error("value is required")]
    Required,

    // ========================================================================
    // Positions
    // ========================================================================
    #[error("position must have 2 or 3 elements, found {found}")]
    PositionArity { found: usize },

    #[error("{axis} must be a finite number")]
    NonNumericCoordinate { axis: &'static str },

    #[error("longitude {value} is outside [-180, 180]")]
    LongitudeOutOfRange { value: f64 },

    #[error("latitude {value} is outside [-90, 90]")]
    LatitudeOutOfRange { value: f64 },

    #[error("altitude must be a number")]
    AltitudeNotNumeric,

    // ========================================================================
    // Lines and rings
    // ========================================================================
    #[error("expected at least {min} positions, found {found}")]
    TooFewPositions { min: usize, found: usize },

    #[error("ring is not closed: first and last positions differ")]
    RingNotClosed,

    #[error("polygon must have at least one ring")]
    NoRings,

    // ========================================================================
    // Recovered faults
    // ========================================================================
    #[error("validation faulted: {message}")]
    InternalFault { message: String },
}

impl ViolationKind {
    /// Get user-actionable suggestions for fixing this violation.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::MissingType | Self::UnknownType { .. } => vec![
                "Set 'type' to one of: Point, LineString, Polygon, MultiPoint, \
                 MultiLineString, MultiPolygon, GeometryCollection, Feature, \
                 FeatureCollection"
                    .into(),
                "Type names are case-sensitive".into(),
            ],
            Self::PositionArity { .. } | Self::NonNumericCoordinate { .. } => vec![
                "Positions are [longitude, latitude] or [longitude, latitude, altitude]".into(),
            ],
            Self::LongitudeOutOfRange { .. } | Self::LatitudeOutOfRange { .. } => vec![
                "Coordinates must be WGS84 degrees".into(),
                "Check that longitude comes before latitude".into(),
            ],
            Self::RingNotClosed => vec![
                "Repeat the first position of the ring as its last position".into(),
            ],
            Self::TooFewPositions { min: 4, .. } => vec![
                "A polygon ring needs at least 3 distinct positions plus the closing one".into(),
            ],
            Self::MissingGeometry => vec![
                "Use \"geometry\": null for a feature without a location".into(),
            ],
            Self::NotAFeature => {
                vec!["Every element of 'features' needs \"type\": \"Feature\"".into()]
            }
            Self::InternalFault { .. } => vec![
                "This appears to be a bug in geoguard".into(),
                "The value was rejected to stay on the safe side".into(),
            ],
            _ => vec!["See RFC 7946 for the GeoJSON object structure".into()],
        }
    }
}
