// 📚 Catalog Store - the session's one and only record collection
//
// Loaded once, read many times. A failed load leaves the store empty for the
// rest of the session, so every filter over it returns nothing.

use crate::error::LoadError;
use crate::record::Record;
use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::OnceLock;
use tracing::{info, warn};

// ============================================================================
// SOURCES
// ============================================================================

/// Where the catalog document comes from
pub trait CatalogSource {
    /// Fetch the raw JSON document
    fn fetch(&self) -> Result<String, LoadError>;
}

/// Catalog stored in a JSON file on disk
#[derive(Debug, Clone)]
pub struct FileSource {
    pub path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileSource { path: path.into() }
    }
}

impl CatalogSource for FileSource {
    fn fetch(&self) -> Result<String, LoadError> {
        fs::read_to_string(&self.path).map_err(|source| LoadError::Io {
            path: self.path.clone(),
            source,
        })
    }
}

/// Catalog document already held in memory
#[derive(Debug, Clone)]
pub struct InlineSource(pub String);

impl CatalogSource for InlineSource {
    fn fetch(&self) -> Result<String, LoadError> {
        Ok(self.0.clone())
    }
}

// ============================================================================
// STORE
// ============================================================================

/// Owner of the catalog.
///
/// `attempted` flips exactly once, before any I/O, so a second or concurrent
/// `load` is rejected instead of racing the first one.
#[derive(Debug, Default)]
pub struct CatalogStore {
    attempted: AtomicBool,
    records: OnceLock<Vec<Record>>,
}

impl CatalogStore {
    /// Create an empty, unloaded store
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch and parse the catalog from `source`
    pub fn load(&self, source: &impl CatalogSource) -> Result<&[Record], LoadError> {
        self.begin_load()?;
        let json = source.fetch().inspect_err(|e| warn!("catalog fetch failed: {}", e))?;
        self.populate(&json)
    }

    /// Parse an already fetched catalog document
    pub fn load_str(&self, json: &str) -> Result<&[Record], LoadError> {
        self.begin_load()?;
        self.populate(json)
    }

    /// Every record, in catalog order. Empty until a load succeeds.
    pub fn get_all(&self) -> &[Record] {
        self.records.get().map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_loaded(&self) -> bool {
        self.records.get().is_some()
    }

    pub fn len(&self) -> usize {
        self.get_all().len()
    }

    pub fn is_empty(&self) -> bool {
        self.get_all().is_empty()
    }

    fn begin_load(&self) -> Result<(), LoadError> {
        self.attempted
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map(|_| ())
            .map_err(|_| LoadError::AlreadyLoaded)
    }

    fn populate(&self, json: &str) -> Result<&[Record], LoadError> {
        let records: Vec<Record> = serde_json::from_str(json)
            .inspect_err(|e| warn!("catalog parse failed: {}", e))?;

        info!(count = records.len(), "catalog loaded");

        // begin_load admits a single caller, so the cell is still empty here
        Ok(self.records.get_or_init(|| records).as_slice())
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const CATALOG: &str = r#"[
        {"nome":"Coraline","titulo":"A Garota","descricao":"...","idade_aproximada":11,"link":"x"},
        {"nome":"Outra Mãe","titulo":"A Beldam","descricao":"...","idade_aproximada":"desconhecida","link":"y"}
    ]"#;

    #[test]
    fn test_load_populates_store_in_order() {
        let store = CatalogStore::new();
        let records = store.load(&InlineSource(CATALOG.to_string())).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(store.get_all()[0].name, "Coraline");
        assert_eq!(store.get_all()[1].name, "Outra Mãe");
        assert!(store.is_loaded());
    }

    #[test]
    fn test_unloaded_store_is_empty() {
        let store = CatalogStore::new();
        assert!(store.get_all().is_empty());
        assert!(!store.is_loaded());
    }

    #[test]
    fn test_parse_failure_leaves_store_empty() {
        let store = CatalogStore::new();
        let err = store.load_str("[{\"nome\": \"sem resto\"}]").unwrap_err();

        assert!(matches!(err, LoadError::Parse(_)));
        assert!(store.get_all().is_empty());
        assert!(!store.is_loaded());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let store = CatalogStore::new();
        let err = store
            .load(&FileSource::new("/definitely/not/here/data.json"))
            .unwrap_err();

        assert!(matches!(err, LoadError::Io { .. }));
        assert!(store.is_empty());
    }

    #[test]
    fn test_second_load_is_rejected() {
        let store = CatalogStore::new();
        store.load_str(CATALOG).unwrap();

        let err = store.load_str("[]").unwrap_err();

        assert!(matches!(err, LoadError::AlreadyLoaded));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_no_retry_after_failure() {
        let store = CatalogStore::new();
        assert!(store.load_str("nope").is_err());

        let err = store.load_str(CATALOG).unwrap_err();
        assert!(matches!(err, LoadError::AlreadyLoaded));
        assert!(store.is_empty());
    }

    #[test]
    fn test_concurrent_loads_admit_one_writer() {
        let store = CatalogStore::new();

        let successes = std::thread::scope(|s| {
            let handles: Vec<_> = (0..8)
                .map(|_| s.spawn(|| store.load_str(CATALOG).is_ok()))
                .collect();
            handles
                .into_iter()
                .map(|h| h.join().unwrap())
                .filter(|ok| *ok)
                .count()
        });

        assert_eq!(successes, 1);
        assert_eq!(store.len(), 2);
    }
}
