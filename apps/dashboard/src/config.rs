use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use config::{create_strategy, AppStrategy};
use search_core::SearchConfig;
use search_core::config::DEFAULT_MIN_QUERY_LEN;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default="default_config", deny_unknown_fields)]
pub struct Config {
    /// Directory holding the procedure files
    pub procedures_dir: PathBuf,
    /// Catalog of procedure metadata
    pub catalog_path: PathBuf,
    /// Identity used when `--user` is not given
    pub default_user: String,
    /// Shortest accepted search query, in characters
    pub min_query_len: usize,
}


fn default_config() -> Config {
    let data_dir = config::data_dir();

    Config {
        procedures_dir: data_dir.join(config::constants::PROCEDURES_DIR_NAME),
        catalog_path: data_dir.join(config::constants::CATALOG_FILE_NAME),
        default_user: std::env::var("USER").unwrap_or_else(|_| "anonymous".to_string()),
        min_query_len: DEFAULT_MIN_QUERY_LEN,
    }
}

impl Default for Config {
    fn default() -> Self {
        default_config()
    }
}

impl Config {
    fn load_str(user_config_str: &str) -> Result<Config> {
        let user_config: Config = toml::from_str(user_config_str)?;
        Ok(user_config)
    }

    /// Load from an explicit file, or from the platform config directory
    pub fn load(path: Option<&Path>) -> Result<Config> {
        let config_path = match path {
            Some(path) => path.to_path_buf(),
            None => create_strategy()?.config_dir().join(config::constants::CONFIG_FILE_NAME),
        };

        match std::fs::read_to_string(&config_path) {
            Ok(user_config_str) => Self::load_str(&user_config_str),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                if path.is_none() {
                    Self::create_example_config(&config_path)?;
                }
                Self::load_str("")
            }
            Err(e) => Err(e.into()),
        }
    }

    pub fn search_config(&self) -> SearchConfig {
        SearchConfig {
            min_query_len: self.min_query_len,
        }
    }

    fn create_example_config(config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let example_config = r#"# procdash configuration
#
# Created on first run. All keys are optional.

# Directory holding the procedure .txt files
# procedures-dir = "/srv/procedures"

# Catalog of procedure metadata (name, icon, owner, visibility)
# catalog-path = "/srv/procedures/catalog.toml"

# User name assumed when --user is not given
# default-user = "alice"

# Shortest accepted search query
# min-query-len = 2
"#;

        std::fs::write(config_path, example_config)?;
        tracing::info!("created example configuration at {:?}", config_path);

        Ok(())
    }
}
