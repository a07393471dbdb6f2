use error_location::ErrorLocation;

use std::panic::Location;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("SQLx error: {source} {location}")]
    Sqlx {
        source: sqlx::Error,
        location: ErrorLocation,
    },

    #[error("Migration error: {message} {location}")]
    Migration {
        message: String,
        location: ErrorLocation,
    },

    #[error("Store initialization failed: {message} {location}")]
    Initialization {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid query: {message} {location}")]
    InvalidQuery {
        message: String,
        location: ErrorLocation,
    },

    #[error("Document not found: {collection}/{id} {location}")]
    DocumentNotFound {
        collection: String,
        id: String,
        location: ErrorLocation,
    },

    #[error("Malformed document {collection}/{id}: {source} {location}")]
    MalformedDocument {
        collection: String,
        id: String,
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },

    #[error("JSON error: {source} {location}")]
    Json {
        source: serde_json::Error,
        location: ErrorLocation,
    },
}

impl StoreError {
    #[track_caller]
    pub fn invalid_query<S: Into<String>>(message: S) -> Self {
        Self::InvalidQuery {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn document_not_found(collection: &str, id: &str) -> Self {
        Self::DocumentNotFound {
            collection: collection.to_string(),
            id: id.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<sqlx::Error> for StoreError {
    #[track_caller]
    fn from(source: sqlx::Error) -> Self {
        Self::Sqlx {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for StoreError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        Self::Json {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;
