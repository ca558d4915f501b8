//! In-memory document source for testing and stdin input.

use std::{
    collections::BTreeMap,
    sync::{Arc, RwLock},
};

use serde_json::Value;

use geoguard_core::{
    application::{
        ApplicationError,
        ports::{Document, DocumentSource},
    },
    error::GeoGuardResult,
};

/// Documents held in memory, listed in identifier order.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    documents: Arc<RwLock<BTreeMap<String, Value>>>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a parsed document, replacing any with the same id.
    pub fn insert(&self, id: impl Into<String>, value: Value) -> GeoGuardResult<()> {
        let mut documents = self
            .documents
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;
        documents.insert(id.into(), value);
        Ok(())
    }

    /// Parse `text` as JSON and store it.
    pub fn insert_raw(&self, id: impl Into<String>, text: &str) -> GeoGuardResult<()> {
        let id = id.into();
        let value = serde_json::from_str(text).map_err(|e| ApplicationError::MalformedDocument {
            id: id.clone(),
            reason: e.to_string(),
        })?;
        self.insert(id, value)
    }
}

impl DocumentSource for MemorySource {
    fn list(&self) -> GeoGuardResult<Vec<String>> {
        let documents = self
            .documents
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;
        Ok(documents.keys().cloned().collect())
    }

    fn load(&self, id: &str) -> GeoGuardResult<Document> {
        let documents = self
            .documents
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;

        documents
            .get(id)
            .map(|value| Document::new(id, value.clone()))
            .ok_or_else(|| ApplicationError::DocumentNotFound { id: id.to_owned() }.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geoguard_core::error::GeoGuardError;
    use serde_json::json;

    #[test]
    fn lists_in_id_order() {
        let source = MemorySource::new();
        source.insert("b", json!(null)).unwrap();
        source.insert("a", json!(null)).unwrap();

        assert_eq!(source.list().unwrap(), vec!["a", "b"]);
    }

    #[test]
    fn insert_raw_parses_and_rejects_bad_json() {
        let source = MemorySource::new();
        source
            .insert_raw("<stdin>", r#"{"type": "Point", "coordinates": [0, 0]}"#)
            .unwrap();
        assert_eq!(source.load("<stdin>").unwrap().value["type"], "Point");

        let err = source.insert_raw("broken", "{").unwrap_err();
        assert!(matches!(
            err,
            GeoGuardError::Application(ApplicationError::MalformedDocument { ref id, .. }) if id == "broken"
        ));
        assert_eq!(source.list().unwrap(), vec!["<stdin>"]);
    }

    #[test]
    fn clones_share_documents() {
        let source = MemorySource::new();
        let other = source.clone();
        other.insert("shared", json!({})).unwrap();
        assert_eq!(source.list().unwrap(), vec!["shared"]);
    }

    #[test]
    fn unknown_id_is_not_found() {
        let err = MemorySource::new().load("missing").unwrap_err();
        assert!(matches!(
            err,
            GeoGuardError::Application(ApplicationError::DocumentNotFound { .. })
        ));
    }

    #[test]
    fn poisoned_store_reports_lock_error() {
        let source = MemorySource::new();
        let writer = source.clone();
        let _ = std::thread::spawn(move || {
            let _guard = writer.documents.write().unwrap();
            panic!("writer died holding the lock");
        })
        .join();

        for err in [
            source.list().unwrap_err(),
            source.load("any").unwrap_err(),
            source.insert("any", json!(null)).unwrap_err(),
        ] {
            assert_eq!(
                err,
                GeoGuardError::Application(ApplicationError::StoreLockError)
            );
        }
    }
}
