pub const TOP_LEVEL_DOMAIN: &str = "org";
pub const AUTHOR: &str = "procdash";
pub const APP_NAME: &str = "procdash";

pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const CATALOG_FILE_NAME: &str = "catalog.toml";
pub const PROCEDURES_DIR_NAME: &str = "procedures";

/// Environment variable overriding the data directory
pub const DATA_DIR_ENV: &str = "PROCDASH_DATA_DIRECTORY";
