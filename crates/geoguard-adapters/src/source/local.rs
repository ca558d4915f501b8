//! Local filesystem document source using std::fs.
//!
//! Roots may be files or directories. Files named explicitly are always
//! included; directories are walked recursively and only files with a
//! matching extension are picked up. Identifiers are the file paths.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use tracing::{debug, instrument};
use walkdir::WalkDir;

use geoguard_core::{
    application::{
        ApplicationError,
        ports::{Document, DocumentSource},
    },
    error::{GeoGuardError, GeoGuardResult},
};

/// Extensions walked by default.
pub const DEFAULT_EXTENSIONS: [&str; 2] = ["geojson", "json"];

/// Production document source reading from disk.
#[derive(Debug, Clone)]
pub struct LocalSource {
    roots: Vec<PathBuf>,
    extensions: Vec<String>,
}

impl LocalSource {
    /// Create a source over the given files and directories.
    pub fn new<I, P>(roots: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            roots: roots.into_iter().map(Into::into).collect(),
            extensions: DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
        }
    }

    /// Replace the extensions used when walking directories.
    ///
    /// Leading dots are ignored and matching is case-insensitive.
    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.extensions = extensions
            .into_iter()
            .map(|e| e.as_ref().trim_start_matches('.').to_ascii_lowercase())
            .collect();
        self
    }

    fn has_wanted_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| {
                self.extensions
                    .iter()
                    .any(|wanted| wanted.eq_ignore_ascii_case(e))
            })
    }

    fn walk(&self, root: &Path, ids: &mut Vec<String>) -> GeoGuardResult<()> {
        for entry in WalkDir::new(root).sort_by_file_name() {
            let entry = entry.map_err(|e| ApplicationError::SourceUnavailable {
                id: root.display().to_string(),
                reason: e.to_string(),
            })?;

            if entry.file_type().is_file() && self.has_wanted_extension(entry.path()) {
                ids.push(entry.path().display().to_string());
            }
        }
        Ok(())
    }
}

impl DocumentSource for LocalSource {
    #[instrument(skip(self), fields(roots = self.roots.len()))]
    fn list(&self) -> GeoGuardResult<Vec<String>> {
        let mut ids = Vec::new();

        for root in &self.roots {
            if root.is_file() {
                ids.push(root.display().to_string());
            } else if root.is_dir() {
                self.walk(root, &mut ids)?;
            } else {
                return Err(ApplicationError::DocumentNotFound {
                    id: root.display().to_string(),
                }
                .into());
            }
        }

        debug!(documents = ids.len(), "Listed local documents");
        Ok(ids)
    }

    fn load(&self, id: &str) -> GeoGuardResult<Document> {
        let raw = fs::read_to_string(id).map_err(|e| map_io_error(id, e))?;
        let value = serde_json::from_str(&raw).map_err(|e| ApplicationError::MalformedDocument {
            id: id.to_owned(),
            reason: e.to_string(),
        })?;
        Ok(Document::new(id, value))
    }
}

fn map_io_error(id: &str, e: io::Error) -> GeoGuardError {
    match e.kind() {
        io::ErrorKind::NotFound => ApplicationError::DocumentNotFound { id: id.to_owned() },
        _ => ApplicationError::SourceUnavailable {
            id: id.to_owned(),
            reason: format!("Failed to read file: {e}"),
        },
    }
    .into()
}
