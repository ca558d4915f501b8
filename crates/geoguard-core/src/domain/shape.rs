//! Small shape assertions shared by the validators.

use serde_json::{Map, Value};

use crate::domain::{
    error::{Violation, ViolationKind},
    path::JsonPath,
    value_objects::json_type_name,
};

pub(crate) fn expect_object<'v>(
    value: &'v Value,
    path: &JsonPath<'_>,
) -> Result<&'v Map<String, Value>, Violation> {
    value.as_object().ok_or_else(|| {
        Violation::new(
            path,
            ViolationKind::NotAnObject {
                found: json_type_name(value),
            },
        )
    })
}

pub(crate) fn expect_array<'v>(
    value: &'v Value,
    path: &JsonPath<'_>,
) -> Result<&'v [Value], Violation> {
    value.as_array().map(Vec::as_slice).ok_or_else(|| {
        Violation::new(
            path,
            ViolationKind::NotAnArray {
                found: json_type_name(value),
            },
        )
    })
}

/// Fetch a member that must be present (any value, including `null`).
pub(crate) fn require_member<'v>(
    object: &'v Map<String, Value>,
    member: &str,
    path: &JsonPath<'_>,
    missing: ViolationKind,
) -> Result<&'v Value, Violation> {
    object
        .get(member)
        .ok_or_else(|| Violation::new(path, missing))
}

/// The string `type` member of an object.
pub(crate) fn type_tag<'v>(
    object: &'v Map<String, Value>,
    path: &JsonPath<'_>,
) -> Result<&'v str, Violation> {
    object
        .get("type")
        .and_then(Value::as_str)
        .ok_or_else(|| Violation::new(path, ViolationKind::MissingType))
}

/// Run `check` on every element of an array, stopping at the first failure.
pub(crate) fn each_element<F>(
    value: &Value,
    path: &JsonPath<'_>,
    mut check: F,
) -> Result<(), Violation>
where
    F: FnMut(&Value, &JsonPath<'_>) -> Result<(), Violation>,
{
    for (index, element) in expect_array(value, path)?.iter().enumerate() {
        check(element, &path.index(index))?;
    }
    Ok(())
}
