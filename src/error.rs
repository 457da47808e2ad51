// Error types for loading the character catalog

use std::path::PathBuf;
use thiserror::Error;

/// Failure to populate the catalog store.
///
/// A load error is terminal for the session: the store stays empty and the
/// user sees the fixed failure message. Nothing retries automatically.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The catalog document could not be read
    #[error("failed to read catalog {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The catalog document is not a valid list of records
    #[error("failed to parse catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// `load` was already called once for this store
    #[error("catalog was already loaded for this session")]
    AlreadyLoaded,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LoadError::AlreadyLoaded;
        assert_eq!(format!("{}", err), "catalog was already loaded for this session");
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<Vec<u8>>("not json").unwrap_err();
        let load_err: LoadError = json_err.into();
        assert!(matches!(load_err, LoadError::Parse(_)));
    }
}
