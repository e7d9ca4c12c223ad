//! Runtime configuration.
//!
//! Layering (later wins): built-in defaults, optional TOML file, then
//! `INVENTORY_`-prefixed environment variables with `__` as the key
//! separator (e.g. `INVENTORY_LOGGING__LEVEL=warn`).

use crate::logging::default_log_level;
use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_CONFIG_FILE: &str = "inventory.toml";
const DEFAULT_DATABASE_FILE: &str = "inventory.sqlite3";
const ENV_PREFIX: &str = "INVENTORY_";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load config: {0}")]
    Load(#[from] figment::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub path: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    /// Must be absolute; see [`crate::logging::init_logging`].
    pub dir: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryConfig {
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            database: DatabaseConfig {
                path: PathBuf::from(DEFAULT_DATABASE_FILE),
            },
            logging: LoggingConfig {
                level: default_log_level().to_string(),
                dir: std::env::temp_dir().join("inventory-logs"),
            },
        }
    }
}

impl InventoryConfig {
    /// Loads configuration from `file` (or `inventory.toml` in the working
    /// directory) layered over defaults and environment overrides.
    ///
    /// A missing `inventory.toml` is not an error; the defaults are used
    /// instead. An explicit `file` must exist.
    pub fn load(file: Option<&Path>) -> Result<Self, ConfigError> {
        Ok(Self::figment(file).extract()?)
    }

    /// Returns the provider stack used by [`Self::load`].
    pub fn figment(file: Option<&Path>) -> Figment {
        let toml = match file {
            Some(file) => Toml::file_exact(file),
            None => Toml::file(DEFAULT_CONFIG_FILE),
        };
        Figment::from(Serialized::defaults(Self::default()))
            .merge(toml)
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
    }
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, InventoryConfig, DEFAULT_CONFIG_FILE};
    use figment::Jail;
    use std::path::{Path, PathBuf};

    #[test]
    fn missing_file_falls_back_to_defaults() {
        Jail::expect_with(|_jail| {
            let config: InventoryConfig = InventoryConfig::figment(None).extract()?;
            assert_eq!(config, InventoryConfig::default());
            Ok(())
        });
    }

    #[test]
    fn toml_file_overrides_defaults() {
        Jail::expect_with(|jail| {
            jail.create_file(
                DEFAULT_CONFIG_FILE,
                r#"
                [database]
                path = "stock.sqlite3"

                [logging]
                level = "warn"
                "#,
            )?;

            let config: InventoryConfig = InventoryConfig::figment(None).extract()?;
            assert_eq!(config.database.path, PathBuf::from("stock.sqlite3"));
            assert_eq!(config.logging.level, "warn");
            assert_eq!(config.logging.dir, InventoryConfig::default().logging.dir);
            Ok(())
        });
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        Jail::expect_with(|_jail| {
            let result = InventoryConfig::load(Some(Path::new("typo-does-not-exist.toml")));
            assert!(matches!(result, Err(ConfigError::Load(_))));
            Ok(())
        });
    }

    #[test]
    fn explicit_file_is_read() {
        Jail::expect_with(|jail| {
            jail.create_file("stock.toml", "[database]\npath = \"stock.sqlite3\"\n")?;

            let config = InventoryConfig::load(Some(Path::new("stock.toml"))).unwrap();
            assert_eq!(config.database.path, PathBuf::from("stock.sqlite3"));
            Ok(())
        });
    }

    #[test]
    fn env_overrides_file() {
        Jail::expect_with(|jail| {
            jail.create_file("custom.toml", "[database]\npath = \"from-file.sqlite3\"\n")?;
            jail.set_env("INVENTORY_DATABASE__PATH", "from-env.sqlite3");

            let config: InventoryConfig =
                InventoryConfig::figment(Some(Path::new("custom.toml"))).extract()?;
            assert_eq!(config.database.path, PathBuf::from("from-env.sqlite3"));
            Ok(())
        });
    }
}
