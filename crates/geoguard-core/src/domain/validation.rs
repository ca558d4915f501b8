//! GeoJSON entry point.
//!
//! `None` models an absent field and `Some(Value::Null)` an explicit null;
//! both pass, since location fields are optional. Everything else must be a
//! Geometry, Feature or FeatureCollection.

use std::cell::Cell;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Once;

use serde_json::Value;
use tracing::{debug, error};

use crate::domain::{
    error::{Violation, ViolationKind},
    feature::{check_feature, check_feature_collection},
    geometry::check_geometry,
    path::JsonPath,
    shape::{expect_object, type_tag},
    value_objects::GeoJsonType,
};

/// Classify and validate an optional GeoJSON value.
///
/// Never panics: an unexpected fault while walking the value is logged and
/// reported as [`ViolationKind::InternalFault`].
pub fn check_geojson(value: Option<&Value>) -> Result<(), Violation> {
    let value = match value {
        None | Some(Value::Null) => return Ok(()),
        Some(value) => value,
    };

    let root = JsonPath::root();
    let result = fail_closed(&root, || dispatch(value, &root));

    if let Err(violation) = &result {
        debug!(path = %violation.path, reason = %violation.kind, "GeoJSON rejected");
    }
    result
}

/// `true` when the value is absent, null, or valid GeoJSON.
pub fn is_valid_geojson(value: Option<&Value>) -> bool {
    check_geojson(value).is_ok()
}

fn dispatch(value: &Value, path: &JsonPath<'_>) -> Result<(), Violation> {
    let object = expect_object(value, path)?;
    let declared = type_tag(object, path)?
        .parse::<GeoJsonType>()
        .map_err(|kind| Violation::new(path, kind))?;

    match declared {
        GeoJsonType::Feature => check_feature(value, path),
        GeoJsonType::FeatureCollection => check_feature_collection(value, path),
        GeoJsonType::Geometry(_) => check_geometry(value, path),
    }
}

thread_local! {
    static GUARDED: Cell<bool> = const { Cell::new(false) };
}

static QUIET_HOOK: Once = Once::new();

/// Panics raised inside the guard are reported through tracing only, so the
/// default hook stays silent for them. Other panics reach the previous hook.
fn install_quiet_hook() {
    QUIET_HOOK.call_once(|| {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            if !GUARDED.try_with(Cell::get).unwrap_or(false) {
                previous(info);
            }
        }));
    });
}

/// Run `check`, turning a panic into a [`ViolationKind::InternalFault`] at `root`.
fn fail_closed(
    root: &JsonPath<'_>,
    check: impl FnOnce() -> Result<(), Violation>,
) -> Result<(), Violation> {
    install_quiet_hook();
    let was_guarded = GUARDED.with(|g| g.replace(true));
    let outcome = panic::catch_unwind(AssertUnwindSafe(check));
    GUARDED.with(|g| g.set(was_guarded));

    outcome.unwrap_or_else(|payload| {
        let message = panic_message(payload.as_ref());
        error!(%message, "GeoJSON validation faulted, rejecting value");
        Err(Violation::new(root, ViolationKind::InternalFault { message }))
    })
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|s| (*s).to_owned())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic".to_owned())
}
