// search-core/src/store.rs
//! Procedure file storage
//!
//! Procedure files live flat inside one directory. Every file name coming from outside is
//! resolved against that directory and rejected if it would escape it.

use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

use crate::error::StoreError;
use crate::extract::read_text_with_encoding_detection;
use crate::models::ProcedureMeta;

pub const PROCEDURE_EXTENSION: &str = ".txt";

/// Source of raw procedure text, as consumed by the search engine
pub trait ContentStore {
    fn read(&self, procedure: &ProcedureMeta) -> Result<String, StoreError>;
}

/// Directory backed procedure storage
#[derive(Debug, Clone)]
pub struct FsStore {
    root: PathBuf,
}

impl FsStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Create the procedures directory if it does not exist yet
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let root = root.into();
        fs::create_dir_all(&root).map_err(|e| StoreError::io(&root, e))?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve a file name inside the store, refusing anything that is not a plain
    /// file name (separators, `..`, absolute paths).
    pub fn resolve(&self, filename: &str) -> Result<PathBuf, StoreError> {
        let mut components = Path::new(filename).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(_)), None) => Ok(self.root.join(filename)),
            _ => Err(StoreError::AccessDenied(filename.to_string())),
        }
    }

    pub fn exists(&self, filename: &str) -> Result<bool, StoreError> {
        Ok(self.resolve(filename)?.is_file())
    }

    /// Read a procedure file as text
    pub fn read_file(&self, filename: &str) -> Result<String, StoreError> {
        let path = self.resolve(filename)?;
        read_text_with_encoding_detection(&path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => StoreError::NotFound(filename.to_string()),
            _ => StoreError::io(&path, e),
        })
    }

    /// Raw bytes of a procedure file, for downloads
    pub fn read_bytes(&self, filename: &str) -> Result<Vec<u8>, StoreError> {
        let path = self.resolve(filename)?;
        fs::read(&path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => StoreError::NotFound(filename.to_string()),
            _ => StoreError::io(&path, e),
        })
    }

    /// Store a new procedure file. The name must end in `.txt` and must not be taken.
    pub fn create(&self, filename: &str, content: &[u8]) -> Result<PathBuf, StoreError> {
        if !filename.ends_with(PROCEDURE_EXTENSION) {
            return Err(StoreError::InvalidFileName {
                name: filename.to_string(),
                reason: "only .txt files are accepted",
            });
        }
        let path = self.resolve(filename)?;
        if path.exists() {
            return Err(StoreError::AlreadyExists(filename.to_string()));
        }
        fs::write(&path, content).map_err(|e| StoreError::io(&path, e))?;
        tracing::info!("created procedure file {:?}", path);
        Ok(path)
    }

    /// Overwrite the content of a procedure file
    pub fn write(&self, filename: &str, content: &[u8]) -> Result<(), StoreError> {
        let path = self.resolve(filename)?;
        fs::write(&path, content).map_err(|e| StoreError::io(&path, e))?;
        tracing::info!("updated procedure file {:?}", path);
        Ok(())
    }

    /// Remove a procedure file. Returns whether a file was actually removed.
    pub fn delete(&self, filename: &str) -> Result<bool, StoreError> {
        let path = self.resolve(filename)?;
        match fs::remove_file(&path) {
            Ok(()) => {
                tracing::info!("deleted procedure file {:?}", path);
                Ok(true)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(StoreError::io(&path, e)),
        }
    }

    /// File names of all procedure files in the store, sorted
    pub fn list(&self) -> Result<Vec<String>, StoreError> {
        let pattern = self.root.join(format!("*{}", PROCEDURE_EXTENSION));
        let pattern = pattern.to_string_lossy();
        let entries = glob::glob(&pattern).map_err(|e| {
            StoreError::io(
                &self.root,
                io::Error::new(io::ErrorKind::InvalidInput, e.to_string()),
            )
        })?;

        let mut names: Vec<String> = entries
            .filter_map(|entry| match entry {
                Ok(path) => path.file_name().map(|n| n.to_string_lossy().into_owned()),
                Err(e) => {
                    tracing::warn!("skipping unreadable entry: {}", e);
                    None
                }
            })
            .collect();
        names.sort();
        Ok(names)
    }
}

impl ContentStore for FsStore {
    fn read(&self, procedure: &ProcedureMeta) -> Result<String, StoreError> {
        self.read_file(&procedure.filename)
    }
}

/// Make an uploaded file name safe: spaces become underscores and only alphanumerics,
/// `.`, `_` and `-` are kept.
pub fn sanitize_filename(name: &str) -> String {
    name.replace(' ', "_")
        .chars()
        .filter(|&c| c.is_alphanumeric() || matches!(c, '.' | '_' | '-'))
        .collect()
}

/// Display name derived from a file name: `docker_basics.txt` becomes `Docker Basics`
pub fn default_display_name(filename: &str) -> String {
    filename
        .replace(PROCEDURE_EXTENSION, "")
        .replace('_', " ")
        .split(' ')
        .map(title_case)
        .collect::<Vec<_>>()
        .join(" ")
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
