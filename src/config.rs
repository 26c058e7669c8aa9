//! Application configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the JSON-file store (one file per collection)
    pub data_dir: PathBuf,
    /// Seed demo data on startup if the store is empty
    pub auto_seed: bool,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            auto_seed: true,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let data_dir = env::var("SILVERKAKI_DATA_DIR").unwrap_or_else(|_| "data".to_string());

        let auto_seed = match env::var("SILVERKAKI_AUTO_SEED") {
            Ok(value) => value
                .trim()
                .parse::<bool>()
                .map_err(|_| ConfigError::Invalid("SILVERKAKI_AUTO_SEED", value))?,
            Err(_) => true,
        };

        Ok(Self {
            data_dir: PathBuf::from(data_dir),
            auto_seed,
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1}")]
    Invalid(&'static str, String),
}

#[cfg(test)]
mod tests {
    use super::*;

    // Single test because the cases share process-wide environment state.
    #[test]
    fn test_config_from_env() {
        env::remove_var("SILVERKAKI_DATA_DIR");
        env::remove_var("SILVERKAKI_AUTO_SEED");

        let config = Config::from_env().expect("Config should load");
        assert_eq!(config.data_dir, PathBuf::from("data"));
        assert!(config.auto_seed);

        env::set_var("SILVERKAKI_AUTO_SEED", "maybe");
        let result = Config::from_env();
        assert!(matches!(result, Err(ConfigError::Invalid(_, _))));
        env::remove_var("SILVERKAKI_AUTO_SEED");
    }
}
