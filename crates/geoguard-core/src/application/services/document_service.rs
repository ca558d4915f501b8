//! Document Service - validate whole GeoJSON documents from a source.
//!
//! Used for bulk checks (site boundary exports, fixtures, imports from the
//! legacy system) before they are attached to project records.

use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use crate::{
    application::ports::DocumentSource,
    domain::{Violation, check_geojson},
    error::GeoGuardResult,
};

/// Result of validating one document.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    Valid,
    Invalid(Violation),
    /// The document could not be loaded or parsed.
    Unreadable { reason: String },
}

impl Outcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocumentReport {
    pub id: String,
    #[serde(flatten)]
    pub outcome: Outcome,
}

/// Counts over a batch of reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub total: usize,
    pub valid: usize,
    pub invalid: usize,
    pub unreadable: usize,
}

impl Summary {
    pub fn from_reports(reports: &[DocumentReport]) -> Self {
        reports
            .iter()
            .fold(Self::default(), |mut summary, report| {
                summary.total += 1;
                match report.outcome {
                    Outcome::Valid => summary.valid += 1,
                    Outcome::Invalid(_) => summary.invalid += 1,
                    Outcome::Unreadable { .. } => summary.unreadable += 1,
                }
                summary
            })
    }

    pub fn all_valid(&self) -> bool {
        self.valid == self.total
    }

    pub fn failed(&self) -> usize {
        self.invalid + self.unreadable
    }
}

/// Validates documents provided by a [`DocumentSource`].
pub struct DocumentService {
    source: Box<dyn DocumentSource>,
}

impl DocumentService {
    pub fn new(source: Box<dyn DocumentSource>) -> Self {
        Self { source }
    }

    /// Validate a single document. Load failures are returned as errors.
    #[instrument(skip(self))]
    pub fn validate(&self, id: &str) -> GeoGuardResult<DocumentReport> {
        let document = self.source.load(id)?;

        let outcome = match check_geojson(Some(&document.value)) {
            Ok(()) => Outcome::Valid,
            Err(violation) => Outcome::Invalid(violation),
        };
        debug!(valid = outcome.is_valid(), "Document checked");

        Ok(DocumentReport {
            id: document.id,
            outcome,
        })
    }

    /// Validate every document in the source.
    ///
    /// A document that cannot be loaded becomes [`Outcome::Unreadable`] so
    /// one bad file does not hide the rest; failing to list the source is
    /// an error.
    #[instrument(skip_all)]
    pub fn validate_all(&self) -> GeoGuardResult<Vec<DocumentReport>> {
        let ids = self.source.list()?;
        info!(documents = ids.len(), "Validating documents");

        let reports: Vec<DocumentReport> = ids
            .into_iter()
            .map(|id| {
                self.validate(&id).unwrap_or_else(|e| {
                    warn!(document = %id, error = %e, "Document unreadable");
                    DocumentReport {
                        id,
                        outcome: Outcome::Unreadable {
                            reason: e.to_string(),
                        },
                    }
                })
            })
            .collect();

        let summary = Summary::from_reports(&reports);
        info!(
            valid = summary.valid,
            invalid = summary.invalid,
            unreadable = summary.unreadable,
            "Validation finished"
        );
        Ok(reports)
    }
}
