// search-core/src/models.rs
//! Procedure metadata and search result types

use serde::{Deserialize, Serialize};

pub const DEFAULT_ICON: &str = "📄";

/// Catalog record describing one procedure file.
///
/// Ownership and visibility live here, never in the parsed document itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcedureMeta {
    pub id: u64,
    pub name: String,
    #[serde(default = "default_icon")]
    pub icon: String,
    #[serde(default)]
    pub description: String,
    /// Backing file name inside the procedures directory
    pub filename: String,
    #[serde(default)]
    pub order: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    #[serde(default = "default_public")]
    pub is_public: bool,
}

fn default_icon() -> String {
    DEFAULT_ICON.to_string()
}

fn default_public() -> bool {
    true
}

impl ProcedureMeta {
    pub fn is_owned_by(&self, username: &str) -> bool {
        self.owner.as_deref() == Some(username)
    }
}

/// Fields for a new catalog record; the id is assigned by the catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProcedure {
    pub name: String,
    pub icon: String,
    pub description: String,
    pub filename: String,
    /// Explicit position, appended after the existing records when `None`
    pub order: Option<i64>,
    pub owner: Option<String>,
    pub is_public: bool,
}

impl NewProcedure {
    pub fn new(name: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            icon: default_icon(),
            description: String::new(),
            filename: filename.into(),
            order: None,
            owner: None,
            is_public: true,
        }
    }
}

/// Partial update of a catalog record, `None` leaves the field unchanged
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcedureUpdate {
    pub name: Option<String>,
    pub icon: Option<String>,
    pub description: Option<String>,
    pub is_public: Option<bool>,
}

impl ProcedureUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.icon.is_none()
            && self.description.is_none()
            && self.is_public.is_none()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum MatchKind {
    /// Query found in the procedure name or description
    Metadata,
    /// Query found inside the procedure file
    Content,
}

/// A section of a document that matched the query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionHit {
    /// Position of the section within the parsed document
    pub index: usize,
    pub title: String,
    pub description: String,
    /// Query found in the section title or description
    pub section_match: bool,
    /// Number of commands whose label or body contains the query
    pub matching_commands: usize,
}

/// One search result entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    pub kind: MatchKind,
    pub procedure: ProcedureMeta,
    /// Qualifying sections, always empty for metadata matches
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sections: Vec<SectionHit>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SearchOutcome {
    /// The trimmed query is shorter than the configured minimum, nothing was scanned
    QueryTooShort { min_len: usize },
    Matches { results: Vec<Match> },
}

impl SearchOutcome {
    /// Results of the search, empty when the query was declined
    pub fn results(&self) -> &[Match] {
        match self {
            SearchOutcome::QueryTooShort { .. } => &[],
            SearchOutcome::Matches { results } => results,
        }
    }

    pub fn is_declined(&self) -> bool {
        matches!(self, SearchOutcome::QueryTooShort { .. })
    }
}
