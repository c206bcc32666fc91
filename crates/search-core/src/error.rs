// search-core/src/error.rs
//! Error types for the catalog and the content store

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("procedure file not found: {0}")]
    NotFound(String),

    #[error("access denied: '{0}' resolves outside the procedures directory")]
    AccessDenied(String),

    #[error("a procedure file named '{0}' already exists")]
    AlreadyExists(String),

    #[error("invalid procedure file name '{name}': {reason}")]
    InvalidFileName { name: String, reason: &'static str },

    #[error("I/O error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StoreError::Io {
            path: path.into(),
            source,
        }
    }
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("procedure {0} not found in catalog")]
    NotFound(u64),

    #[error("failed to access catalog {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to serialize catalog: {0}")]
    Serialize(#[from] toml::ser::Error),
}
