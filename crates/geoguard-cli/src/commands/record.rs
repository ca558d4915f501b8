//! Implementation of the `geoguard check-record` command.
//!
//! The input file holds one record object or an array of them. Every record
//! is checked; a rejected record prints the same 400 body the backend would
//! return for it.

use std::{
    fs,
    io::{self, Read},
    path::Path,
};

use serde::Serialize;
use serde_json::Value;
use tracing::{info, instrument};

use geoguard_adapters::SchemaLoader;
use geoguard_core::{
    application::{RecordSchema, RecordValidationService, ValidationFailure},
    error::GeoGuardError,
};

use crate::{
    cli::CheckRecordArgs,
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

#[derive(Debug, Serialize)]
struct RecordReport {
    index: usize,
    accepted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    response: Option<ValidationFailure>,
}

#[instrument(skip_all, fields(file = %args.file.display()))]
pub fn execute(args: CheckRecordArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let schema = match args.schema.or(config.validation.schema) {
        Some(path) => SchemaLoader::new(path).load()?,
        None => RecordSchema::project_default(),
    };
    let service = RecordValidationService::new(schema);

    let text = read_input(&args.file)?;
    let value: Value = serde_json::from_str(&text)
        .with_cli_context(|| format!("{} is not valid JSON", args.file.display()))?;

    let reports = check_records(&service, &value)?;
    let rejected = reports.iter().filter(|r| !r.accepted).count();
    info!(records = reports.len(), rejected, "Records checked");

    if output.is_json() {
        output.json(&reports)?;
    } else {
        render_reports(&output, &reports)?;
    }

    if rejected == 0 {
        Ok(())
    } else {
        Err(CliError::RejectedRecords {
            rejected,
            total: reports.len(),
        })
    }
}

fn read_input(path: &Path) -> CliResult<String> {
    if path.as_os_str() == "-" {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .with_cli_context(|| "Failed to read standard input")?;
        return Ok(text);
    }

    fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => CliError::PathNotFound {
            path: path.to_path_buf(),
        },
        _ => CliError::IoError {
            message: format!("Failed to read '{}'", path.display()),
            source: e,
        },
    })
}

/// Validate a single record or each element of an array of records.
fn check_records(service: &RecordValidationService, value: &Value) -> CliResult<Vec<RecordReport>> {
    let records: Vec<&Value> = match value {
        Value::Array(items) => items.iter().collect(),
        single => vec![single],
    };

    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| match service.validate_record(record) {
            Ok(()) => Ok(RecordReport {
                index,
                accepted: true,
                response: None,
            }),
            Err(GeoGuardError::Rejected(failure)) => Ok(RecordReport {
                index,
                accepted: false,
                response: Some(failure),
            }),
            Err(other) => Err(other.into()),
        })
        .collect()
}

fn render_reports(output: &OutputManager, reports: &[RecordReport]) -> io::Result<()> {
    for report in reports {
        let Some(failure) = &report.response else {
            output.success(&format!("record {}: accepted", report.index))?;
            continue;
        };

        output.error(&format!(
            "record {}: rejected ({})",
            report.index,
            failure.fields().join(", ")
        ))?;
        for error in &failure.errors {
            output.print(&format!(
                "    {}: {} [{}] {}",
                error.field, error.message, error.constraint, error.violation
            ))?;
        }
        output.print(&serde_json::to_string_pretty(failure).map_err(io::Error::other)?)?;
    }
    Ok(())
}
