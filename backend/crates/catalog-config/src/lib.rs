mod config;
mod database_config;
mod error;
mod hierarchy_config;
mod log_level;
mod logging_config;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use database_config::{
    DEFAULT_MAX_CONNECTIONS, DatabaseConfig, MAX_MAX_CONNECTIONS, MIN_MAX_CONNECTIONS,
};
pub use error::{ConfigError, ConfigErrorResult};
pub use hierarchy_config::{
    DEFAULT_IN_QUERY_CHUNK_SIZE, DEFAULT_REBUILD_CONCURRENCY, HierarchyConfig,
    MAX_IN_QUERY_CHUNK_SIZE, MAX_REBUILD_CONCURRENCY, MIN_IN_QUERY_CHUNK_SIZE,
    MIN_REBUILD_CONCURRENCY,
};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;

pub const CONFIG_DIR_ENV: &str = "CATALOG_CONFIG_DIR";
pub const CONFIG_FILE_NAME: &str = "config.toml";

const DEFAULT_CONFIG_DIR_NAME: &str = ".catalog";
const DEFAULT_DATABASE_FILENAME: &str = "catalog.db";
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;
