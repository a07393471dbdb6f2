use crate::models::null_as_default;
use crate::{CoreError, CoreResult, Fields};

use std::panic::Location;

use error_location::ErrorLocation;
use serde::Deserialize;
use serde_json::Value;

/// A node in the category graph.
///
/// Categories may have several parents, so the graph is a DAG rather than a
/// tree. `level` and `product_count` are denormalized values maintained by
/// the hierarchy engine; readers must tolerate them being stale.
///
/// Only the hierarchy fields are decoded. Anything else on the document
/// (names, slugs, localized content) is left to its owners.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct Category {
    #[serde(skip)]
    pub id: String,

    // Hierarchy
    #[serde(rename = "parentIds", default, deserialize_with = "null_as_default")]
    pub parent_ids: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub level: u32,

    // Aggregates
    #[serde(default, deserialize_with = "null_as_default")]
    pub product_count: u64,
}

impl Category {
    pub fn is_root(&self) -> bool {
        self.parent_ids.is_empty()
    }

    /// Decode a stored document. Missing or `null` fields take their defaults.
    #[track_caller]
    pub fn from_fields(id: &str, fields: &Fields) -> CoreResult<Self> {
        let mut category: Category = serde_json::from_value(Value::Object(fields.clone()))
            .map_err(|source| CoreError::Decode {
                entity: "category",
                id: id.to_string(),
                source,
                location: ErrorLocation::from(Location::caller()),
            })?;
        category.id = id.to_string();
        Ok(category)
    }
}
