//! TOML record schema loader.
//!
//! Builds a [`RecordSchema`] from a file such as:
//!
//! ```toml
//! [fields.location]
//! rule = "geojson"
//!
//! [fields.site_boundary]
//! rule     = "geojson"
//! required = true
//! ```
//!
//! `rule` names one of the rules known to the core (`geojson`, `required`).
//! `required = true` adds the required rule ahead of `rule`. Fields are
//! checked in name order.

use std::{
    collections::BTreeMap,
    fs,
    path::PathBuf,
};

use serde::Deserialize;
use tracing::{debug, instrument, warn};

use geoguard_core::{
    application::{ApplicationError, RecordSchema},
    domain::{RequiredRule, rule_by_name},
    error::{GeoGuardError, GeoGuardResult},
};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SchemaFile {
    #[serde(default)]
    fields: BTreeMap<String, FieldEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FieldEntry {
    rule: Option<String>,
    #[serde(default)]
    required: bool,
}

/// Parse schema text into a [`RecordSchema`].
pub fn parse_schema(text: &str) -> GeoGuardResult<RecordSchema> {
    let file: SchemaFile = toml::from_str(text).map_err(|e| GeoGuardError::Configuration {
        message: format!("invalid schema: {e}"),
    })?;

    let mut schema = RecordSchema::new();
    for (field, entry) in file.fields {
        if entry.rule.is_none() && !entry.required {
            warn!(field = %field, "Schema field has no rules, skipping");
            continue;
        }

        if entry.required {
            schema = schema.with_rule(field.clone(), RequiredRule);
        }

        if let Some(name) = entry.rule {
            let rule = rule_by_name(&name).ok_or_else(|| ApplicationError::UnknownRule {
                field: field.clone(),
                name: name.clone(),
            })?;
            schema = schema.with_boxed_rule(field, rule);
        }
    }

    debug!(fields = schema.len(), "Parsed record schema");
    Ok(schema)
}

/// Loads a record schema from a TOML file on disk.
#[derive(Debug, Clone)]
pub struct SchemaLoader {
    path: PathBuf,
}

impl SchemaLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn load(&self) -> GeoGuardResult<RecordSchema> {
        let raw = fs::read_to_string(&self.path).map_err(|e| GeoGuardError::Configuration {
            message: format!("cannot read schema {}: {e}", self.path.display()),
        })?;
        parse_schema(&raw)
    }
}
