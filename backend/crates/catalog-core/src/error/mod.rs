use crate::ErrorLocation;

use std::result::Result as StdResult;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Failed to decode {entity} '{id}': {source} {location}")]
    Decode {
        entity: &'static str,
        id: String,
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },
}

pub type Result<T> = StdResult<T, CoreError>;
