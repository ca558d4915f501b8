//! Position (coordinate tuple) validation.

use std::ops::RangeInclusive;

use serde::Serialize;
use serde_json::Value;

use crate::domain::{
    error::{Violation, ViolationKind},
    path::JsonPath,
    shape::expect_array,
};

pub const LONGITUDE_RANGE: RangeInclusive<f64> = -180.0..=180.0;
pub const LATITUDE_RANGE: RangeInclusive<f64> = -90.0..=90.0;

/// Absolute per-component tolerance when comparing positions for ring closure.
pub const CLOSURE_TOLERANCE: f64 = 1e-10;

/// A validated `[longitude, latitude, altitude?]` tuple.
///
/// Altitude is unbounded: elevations below sea level are legitimate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Position {
    pub longitude: f64,
    pub latitude: f64,
    pub altitude: Option<f64>,
}

impl Position {
    /// Component-wise equality within [`CLOSURE_TOLERANCE`].
    ///
    /// Positions of different dimensionality are never equal.
    pub fn approx_eq(&self, other: &Position) -> bool {
        let close = |a: f64, b: f64| (a - b).abs() <= CLOSURE_TOLERANCE;

        close(self.longitude, other.longitude)
            && close(self.latitude, other.latitude)
            && match (self.altitude, other.altitude) {
                (None, None) => true,
                (Some(a), Some(b)) => close(a, b),
                _ => false,
            }
    }
}

/// Parse and range-check a position.
pub fn check_position(value: &Value, path: &JsonPath<'_>) -> Result<Position, Violation> {
    let elements = expect_array(value, path)?;

    let (lng, lat, alt) = match elements {
        [lng, lat] => (lng, lat, None),
        [lng, lat, alt] => (lng, lat, Some(alt)),
        _ => {
            return Err(Violation::new(
                path,
                ViolationKind::PositionArity {
                    found: elements.len(),
                },
            ));
        }
    };

    let longitude = finite(lng).ok_or_else(|| {
        Violation::new(
            &path.index(0),
            ViolationKind::NonNumericCoordinate { axis: "longitude" },
        )
    })?;
    if !LONGITUDE_RANGE.contains(&longitude) {
        return Err(Violation::new(
            &path.index(0),
            ViolationKind::LongitudeOutOfRange { value: longitude },
        ));
    }

    let latitude = finite(lat).ok_or_else(|| {
        Violation::new(
            &path.index(1),
            ViolationKind::NonNumericCoordinate { axis: "latitude" },
        )
    })?;
    if !LATITUDE_RANGE.contains(&latitude) {
        return Err(Violation::new(
            &path.index(1),
            ViolationKind::LatitudeOutOfRange { value: latitude },
        ));
    }

    let altitude = alt
        .map(|alt| {
            alt.as_f64()
                .ok_or_else(|| Violation::new(&path.index(2), ViolationKind::AltitudeNotNumeric))
        })
        .transpose()?;

    Ok(Position {
        longitude,
        latitude,
        altitude,
    })
}

/// `true` when `value` is a valid position.
pub fn validate_position(value: &Value) -> bool {
    check_position(value, &JsonPath::root()).is_ok()
}

fn finite(value: &Value) -> Option<f64> {
    value.as_f64().filter(|n| n.is_finite())
}
