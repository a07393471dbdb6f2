use crate::{
    CONFIG_DIR_ENV, CONFIG_FILE_NAME, ConfigError, ConfigErrorResult, DEFAULT_CONFIG_DIR_NAME,
    DatabaseConfig, HierarchyConfig, LoggingConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
    pub hierarchy: HierarchyConfig,
    #[serde(skip)]
    directory: PathBuf,
}

impl Config {
    /// Load config from the default config directory.
    ///
    /// Loading order:
    /// 1. Check for CATALOG_CONFIG_DIR env var, else use ./.catalog/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply CATALOG_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        Self::load_from(Self::config_dir()?)
    }

    /// Same as [`Config::load`] with an explicit config directory.
    pub fn load_from(config_dir: impl Into<PathBuf>) -> ConfigErrorResult<Self> {
        let config_dir = config_dir.into();

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILE_NAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.directory = config_dir;
        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: CATALOG_CONFIG_DIR env var > ./.catalog/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR_NAME))
    }

    /// Directory this config was loaded from.
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.database.validate()?;
        self.hierarchy.validate()?;
        Ok(())
    }

    /// Get absolute path to database file.
    pub fn database_path(&self) -> PathBuf {
        self.directory.join(&self.database.path)
    }

    /// Log file path, when file logging is configured.
    pub fn log_file_path(&self) -> Option<PathBuf> {
        self.logging
            .file
            .as_ref()
            .map(|file| self.directory.join(&self.logging.dir).join(file))
    }

    /// Log configuration summary.
    pub fn log_summary(&self) {
        info!("Configuration loaded from {}:", self.directory.display());
        info!(
            "  database: {} (max {} connections)",
            self.database.path, self.database.max_connections
        );
        info!(
            "  logging: {} (colored: {}, file: {})",
            *self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("none")
        );
        info!(
            "  hierarchy: chunk={}, rebuild_concurrency={}",
            self.hierarchy.in_query_chunk_size, self.hierarchy.rebuild_concurrency
        );
    }

    fn apply_env_overrides(&mut self) {
        // Database
        Self::apply_env_string("CATALOG_DATABASE_PATH", &mut self.database.path);
        Self::apply_env_parse(
            "CATALOG_DATABASE_MAX_CONNECTIONS",
            &mut self.database.max_connections,
        );

        // Logging
        Self::apply_env_parse("CATALOG_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("CATALOG_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("CATALOG_LOG_FILE", &mut self.logging.file);

        // Hierarchy
        Self::apply_env_parse(
            "CATALOG_HIERARCHY_IN_QUERY_CHUNK_SIZE",
            &mut self.hierarchy.in_query_chunk_size,
        );
        Self::apply_env_parse(
            "CATALOG_HIERARCHY_REBUILD_CONCURRENCY",
            &mut self.hierarchy.rebuild_concurrency,
        );
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
