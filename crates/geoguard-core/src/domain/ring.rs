//! Line and ring shape rules.

use serde_json::Value;

use crate::domain::{
    error::{Violation, ViolationKind},
    path::JsonPath,
    position::check_position,
    shape::expect_array,
};

/// Minimum positions in a LineString.
pub const MIN_LINE_POSITIONS: usize = 2;

/// Minimum positions in a polygon ring: three corners plus the closing repeat.
pub const MIN_RING_POSITIONS: usize = 4;

/// An array of at least `min_length` valid positions.
pub fn check_line_like(
    coords: &Value,
    min_length: usize,
    path: &JsonPath<'_>,
) -> Result<(), Violation> {
    let positions = expect_array(coords, path)?;
    if positions.len() < min_length {
        return Err(Violation::new(
            path,
            ViolationKind::TooFewPositions {
                min: min_length,
                found: positions.len(),
            },
        ));
    }
    for (index, position) in positions.iter().enumerate() {
        check_position(position, &path.index(index))?;
    }
    Ok(())
}

pub fn validate_line_like(coords: &Value, min_length: usize) -> bool {
    check_line_like(coords, min_length, &JsonPath::root()).is_ok()
}

/// A closed linear ring: at least four positions, first equal to last.
pub fn check_ring(ring: &Value, path: &JsonPath<'_>) -> Result<(), Violation> {
    let positions = expect_array(ring, path)?;
    if positions.len() < MIN_RING_POSITIONS {
        return Err(Violation::new(
            path,
            ViolationKind::TooFewPositions {
                min: MIN_RING_POSITIONS,
                found: positions.len(),
            },
        ));
    }

    let mut first = None;
    let mut last = None;
    for (index, position) in positions.iter().enumerate() {
        let parsed = check_position(position, &path.index(index))?;
        first.get_or_insert(parsed);
        last = Some(parsed);
    }

    match (first, last) {
        (Some(first), Some(last)) if first.approx_eq(&last) => Ok(()),
        _ => Err(Violation::new(path, ViolationKind::RingNotClosed)),
    }
}

pub fn validate_ring(ring: &Value) -> bool {
    check_ring(ring, &JsonPath::root()).is_ok()
}

/// Polygon coordinates: one or more rings, each closed.
pub fn check_polygon_rings(coords: &Value, path: &JsonPath<'_>) -> Result<(), Violation> {
    let rings = expect_array(coords, path)?;
    if rings.is_empty() {
        return Err(Violation::new(path, ViolationKind::NoRings));
    }
    for (index, ring) in rings.iter().enumerate() {
        check_ring(ring, &path.index(index))?;
    }
    Ok(())
}
