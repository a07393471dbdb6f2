use catalog_config::ConfigError;
use catalog_hierarchy::HierarchyError;
use catalog_store::StoreError;

use std::panic::Location;
use std::path::PathBuf;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AdminError {
    #[error("Config error: {source}")]
    Config {
        #[source]
        source: ConfigError,
        location: ErrorLocation,
    },

    #[error("Store error: {source}")]
    Store {
        #[source]
        source: StoreError,
        location: ErrorLocation,
    },

    #[error("{source}")]
    Hierarchy {
        #[source]
        source: HierarchyError,
        location: ErrorLocation,
    },

    #[error("Failed to create {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Logger error: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },

    #[error("Error serializing response: {source}")]
    Json {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },
}

impl AdminError {
    #[track_caller]
    pub fn logger<S: Into<String>>(message: S) -> Self {
        Self::Logger {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<ConfigError> for AdminError {
    #[track_caller]
    fn from(source: ConfigError) -> Self {
        Self::Config {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<StoreError> for AdminError {
    #[track_caller]
    fn from(source: StoreError) -> Self {
        Self::Store {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<HierarchyError> for AdminError {
    #[track_caller]
    fn from(source: HierarchyError) -> Self {
        Self::Hierarchy {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for AdminError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        Self::Json {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, AdminError>;
