// search-core/src/config.rs
//! Search configuration

use serde::{Deserialize, Serialize};

pub const DEFAULT_MIN_QUERY_LEN: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct SearchConfig {
    /// Queries shorter than this (in characters, after trimming) are declined
    pub min_query_len: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            min_query_len: DEFAULT_MIN_QUERY_LEN,
        }
    }
}
