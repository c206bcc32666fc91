// search-core/src/lib.rs
//! Procedure dashboard core
//!
//! - Procedure metadata catalog persisted as TOML
//! - Role based capabilities and the visible procedure set
//! - Directory backed procedure file storage
//! - Case-insensitive search over metadata and parsed procedure content

pub mod access;
pub mod catalog;
pub mod config;
pub mod error;
pub mod extract;
pub mod models;
pub mod samples;
pub mod search;
pub mod store;

pub use access::{visible_procedures, Caller, Permissions, Role};
pub use catalog::Catalog;
pub use config::SearchConfig;
pub use error::{CatalogError, StoreError};
pub use extract::{decode_text, read_text_with_encoding_detection};
pub use models::{
    Match, MatchKind, NewProcedure, ProcedureMeta, ProcedureUpdate, SearchOutcome, SectionHit,
};
pub use samples::{install_samples, SampleInstall, SAMPLES};
pub use search::{match_sections, search, search_with_config};
pub use store::{default_display_name, sanitize_filename, ContentStore, FsStore};
