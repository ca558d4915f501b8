//! Implementation of the `geoguard validate` command.

use std::io::{self, Read};

use serde::Serialize;
use tracing::{debug, instrument};

use geoguard_adapters::{LocalSource, MemorySource};
use geoguard_core::application::{
    DocumentReport, DocumentService, DocumentSource, Outcome, Summary,
};

use crate::{
    cli::ValidateArgs,
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Identifier reported for a document read from standard input.
pub const STDIN_ID: &str = "<stdin>";

#[derive(Debug, Serialize)]
struct ValidationReport<'a> {
    documents: &'a [DocumentReport],
    summary: Summary,
}

#[instrument(skip_all, fields(stdin = args.stdin))]
pub fn execute(args: ValidateArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let source = build_source(&args, &config)?;
    let reports = DocumentService::new(source).validate_all()?;
    let summary = Summary::from_reports(&reports);

    if output.is_json() {
        output.json(&ValidationReport {
            documents: &reports,
            summary,
        })?;
    } else {
        render_reports(&output, &reports, &summary)?;
    }

    if summary.all_valid() {
        Ok(())
    } else {
        Err(CliError::InvalidDocuments {
            failed: summary.failed(),
            total: summary.total,
        })
    }
}

fn build_source(args: &ValidateArgs, config: &AppConfig) -> CliResult<Box<dyn DocumentSource>> {
    if args.stdin {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .with_cli_context(|| "Failed to read standard input")?;

        let source = MemorySource::new();
        source.insert_raw(STDIN_ID, &text)?;
        return Ok(Box::new(source));
    }

    let extensions = if args.extensions.is_empty() {
        &config.validation.extensions
    } else {
        &args.extensions
    };
    debug!(?extensions, roots = args.paths.len(), "Walking local paths");

    Ok(Box::new(
        LocalSource::new(args.paths.iter().cloned()).with_extensions(extensions),
    ))
}

fn render_reports(
    output: &OutputManager,
    reports: &[DocumentReport],
    summary: &Summary,
) -> io::Result<()> {
    if reports.is_empty() {
        return output.warning("No documents found");
    }

    for report in reports {
        match &report.outcome {
            Outcome::Valid => output.success(&report.id)?,
            Outcome::Invalid(violation) => {
                output.error(&format!("{}: {violation}", report.id))?;
                if let Some(hint) = violation.suggestions().first() {
                    output.print(&format!("    hint: {hint}"))?;
                }
            }
            Outcome::Unreadable { reason } => {
                output.error(&format!("{}: unreadable ({reason})", report.id))?
            }
        }
    }

    output.print("")?;
    output.info(&summary_line(summary))
}

fn summary_line(summary: &Summary) -> String {
    let mut line = format!(
        "{} document(s): {} valid, {} invalid",
        summary.total, summary.valid, summary.invalid
    );
    if summary.unreadable > 0 {
        line.push_str(&format!(", {} unreadable", summary.unreadable));
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn summary_line_mentions_unreadable_only_when_present() {
        let clean = Summary {
            total: 2,
            valid: 1,
            invalid: 1,
            unreadable: 0,
        };
        assert_eq!(summary_line(&clean), "2 document(s): 1 valid, 1 invalid");

        let broken = Summary {
            unreadable: 1,
            total: 3,
            ..clean
        };
        assert_eq!(
            summary_line(&broken),
            "3 document(s): 1 valid, 1 invalid, 1 unreadable"
        );
    }

    fn walk(args: &ValidateArgs, config: &AppConfig) -> Vec<String> {
        build_source(args, config)
            .unwrap()
            .list()
            .unwrap()
            .into_iter()
            .map(|id| {
                std::path::Path::new(&id)
                    .file_name()
                    .unwrap()
                    .to_string_lossy()
                    .into_owned()
            })
            .collect()
    }

    #[test]
    fn configured_extensions_apply_without_flag() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("a.geojson"), "{}").unwrap();
        fs::write(temp.path().join("b.json"), "{}").unwrap();

        let mut args = ValidateArgs {
            paths: vec![temp.path().to_path_buf()],
            stdin: false,
            extensions: vec![],
        };
        let mut config = AppConfig::default();
        config.validation.extensions = vec!["geojson".into()];

        assert_eq!(walk(&args, &config), ["a.geojson"]);

        args.extensions = vec!["json".into()];
        assert_eq!(walk(&args, &config), ["b.json"]);
    }
}
