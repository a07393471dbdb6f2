use catalog_core::CoreError;
use catalog_store::StoreError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Failures surfaced by the engine. Missing categories are never errors;
/// only the store and document decoding can fail an operation.
#[derive(Error, Debug)]
pub enum HierarchyError {
    #[error("{source}")]
    Store {
        #[source]
        source: StoreError,
        location: ErrorLocation,
    },

    #[error("{source}")]
    Decode {
        #[source]
        source: CoreError,
        location: ErrorLocation,
    },
}

impl From<StoreError> for HierarchyError {
    #[track_caller]
    fn from(source: StoreError) -> Self {
        Self::Store {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<CoreError> for HierarchyError {
    #[track_caller]
    fn from(source: CoreError) -> Self {
        Self::Decode {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, HierarchyError>;
