// search-core/src/catalog.rs
//! Procedure catalog
//!
//! The catalog holds one metadata record per procedure file and is persisted as TOML:
//!
//! ```toml
//! [[procedure]]
//! id = 1
//! name = "Docker"
//! icon = "🐳"
//! description = "Containers and images"
//! filename = "docker.txt"
//! order = 1
//! owner = "alice"
//! is_public = true
//! ```
//!
//! Records are always kept sorted by `(order, name)`.

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;
use crate::models::{NewProcedure, ProcedureMeta, ProcedureUpdate};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default, rename = "procedure")]
    procedures: Vec<ProcedureMeta>,
}

impl Catalog {
    pub fn from_records(procedures: Vec<ProcedureMeta>) -> Self {
        let mut catalog = Self { procedures };
        catalog.sort();
        catalog
    }

    pub fn load_str(content: &str) -> Result<Self, toml::de::Error> {
        let catalog: Catalog = toml::from_str(content)?;
        Ok(Self::from_records(catalog.procedures))
    }

    /// Load the catalog, a missing file is an empty catalog
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        match fs::read_to_string(path) {
            Ok(content) => Self::load_str(&content).map_err(|source| CatalogError::Parse {
                path: path.to_path_buf(),
                source,
            }),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!("catalog {:?} does not exist yet, starting empty", path);
                Ok(Self::default())
            }
            Err(source) => Err(CatalogError::Io {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), CatalogError> {
        let content = toml::to_string(self)?;
        let io_err = |source: io::Error| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        fs::write(path, content).map_err(io_err)?;
        tracing::debug!("saved {} catalog records to {:?}", self.len(), path);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.procedures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.procedures.is_empty()
    }

    /// Records in `(order, name)` order
    pub fn iter(&self) -> std::slice::Iter<'_, ProcedureMeta> {
        self.procedures.iter()
    }

    pub fn get(&self, id: u64) -> Option<&ProcedureMeta> {
        self.procedures.iter().find(|p| p.id == id)
    }

    pub fn require(&self, id: u64) -> Result<&ProcedureMeta, CatalogError> {
        self.get(id).ok_or(CatalogError::NotFound(id))
    }

    pub fn find_by_filename(&self, filename: &str) -> Option<&ProcedureMeta> {
        self.procedures.iter().find(|p| p.filename == filename)
    }

    /// Add a record, assigning the next free id
    pub fn insert(&mut self, new: NewProcedure) -> ProcedureMeta {
        let id = self.procedures.iter().map(|p| p.id).max().unwrap_or(0) + 1;
        let order = new.order.unwrap_or(self.procedures.len() as i64 + 1);
        let record = ProcedureMeta {
            id,
            name: new.name,
            icon: new.icon,
            description: new.description,
            filename: new.filename,
            order,
            owner: new.owner,
            is_public: new.is_public,
        };
        self.procedures.push(record.clone());
        self.sort();
        record
    }

    pub fn update(&mut self, id: u64, update: ProcedureUpdate) -> Result<ProcedureMeta, CatalogError> {
        let record = self
            .procedures
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(CatalogError::NotFound(id))?;

        if let Some(name) = update.name {
            record.name = name;
        }
        if let Some(icon) = update.icon {
            record.icon = icon;
        }
        if let Some(description) = update.description {
            record.description = description;
        }
        if let Some(is_public) = update.is_public {
            record.is_public = is_public;
        }

        let updated = record.clone();
        self.sort();
        Ok(updated)
    }

    pub fn remove(&mut self, id: u64) -> Result<ProcedureMeta, CatalogError> {
        let position = self
            .procedures
            .iter()
            .position(|p| p.id == id)
            .ok_or(CatalogError::NotFound(id))?;
        Ok(self.procedures.remove(position))
    }

    fn sort(&mut self) {
        self.procedures
            .sort_by(|a, b| a.order.cmp(&b.order).then_with(|| a.name.cmp(&b.name)));
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a ProcedureMeta;
    type IntoIter = std::slice::Iter<'a, ProcedureMeta>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
