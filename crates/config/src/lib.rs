pub mod constants;

pub use etcetera::AppStrategy;
use etcetera::{AppStrategyArgs, choose_app_strategy};

use std::path::PathBuf;
use std::env;


pub fn create_strategy() -> std::result::Result<impl AppStrategy, etcetera::HomeDirError> {
    choose_app_strategy(AppStrategyArgs {
        top_level_domain: constants::TOP_LEVEL_DOMAIN.to_string(),
        author: constants::AUTHOR.to_string(),
        app_name: constants::APP_NAME.to_string(),
    })
}

/// Resolve a directory from an environment variable, falling back to the app strategy
/// and finally to a directory under the system temp dir.
pub fn resolve_dir<S, F>(env_key: &str, strategy: &S, strategy_fn: F) -> PathBuf
where
    S: AppStrategy,
    F: FnOnce(&S) -> Option<PathBuf>,
{
    env::var_os(env_key)
        .map(PathBuf::from)
        .or_else(|| strategy_fn(strategy))
        .unwrap_or_else(|| env::temp_dir().join(constants::APP_NAME))
}

/// Default data directory holding procedure files and the catalog
pub fn data_dir() -> PathBuf {
    match create_strategy() {
        Ok(strategy) => resolve_dir(constants::DATA_DIR_ENV, &strategy, |s| Some(s.data_dir())),
        Err(_) => env::var_os(constants::DATA_DIR_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| env::temp_dir().join(constants::APP_NAME)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_dir_falls_back_to_strategy() {
        let strategy = create_strategy().unwrap();
        let dir = resolve_dir("PROCDASH_TEST_UNSET_VARIABLE", &strategy, |s| Some(s.data_dir()));
        assert_eq!(dir, strategy.data_dir());
    }

    #[test]
    fn test_resolve_dir_falls_back_to_temp() {
        let strategy = create_strategy().unwrap();
        let dir = resolve_dir("PROCDASH_TEST_UNSET_VARIABLE", &strategy, |_| None);
        assert_eq!(dir, env::temp_dir().join(constants::APP_NAME));
    }
}
