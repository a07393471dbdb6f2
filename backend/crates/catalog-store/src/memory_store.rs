use crate::{Document, DocumentStore, Query, StoreError, StoreResult, WriteBatch};

use catalog_core::Fields;

use std::collections::{BTreeMap, HashMap};

use async_trait::async_trait;
use log::debug;
use serde_json::Value;
use tokio::sync::RwLock;

type Collection = BTreeMap<String, Fields>;

/// In-process store used by tests and local tooling.
///
/// Collections are kept in id order so query results match the ordering
/// contract of the SQLite backend. A batch is applied under a single write
/// lock, so readers never observe half of it.
#[derive(Default)]
pub struct MemoryStore {
    collections: RwLock<HashMap<String, Collection>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total documents held in `collection`.
    pub async fn len(&self, collection: &str) -> usize {
        let collections = self.collections.read().await;
        collections.get(collection).map_or(0, BTreeMap::len)
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn get(&self, collection: &str, id: &str) -> StoreResult<Option<Document>> {
        let collections = self.collections.read().await;

        Ok(collections
            .get(collection)
            .and_then(|docs| docs.get(id))
            .map(|fields| Document::new(id, fields.clone())))
    }

    async fn query(&self, query: &Query) -> StoreResult<Vec<Document>> {
        query.validate()?;
        let collections = self.collections.read().await;

        let Some(docs) = collections.get(&query.collection) else {
            return Ok(Vec::new());
        };

        let limit = query.limit.unwrap_or(usize::MAX);
        Ok(docs
            .iter()
            .filter(|(_, fields)| query.matches(fields))
            .take(limit)
            .map(|(id, fields)| Document::new(id.clone(), fields.clone()))
            .collect())
    }

    async fn count(&self, query: &Query) -> StoreResult<u64> {
        query.validate()?;
        let collections = self.collections.read().await;

        Ok(collections.get(&query.collection).map_or(0, |docs| {
            docs.values().filter(|fields| query.matches(fields)).count() as u64
        }))
    }

    async fn set(&self, collection: &str, document: Document) -> StoreResult<()> {
        let mut collections = self.collections.write().await;
        collections
            .entry(collection.to_string())
            .or_default()
            .insert(document.id, document.fields);
        Ok(())
    }

    async fn commit(&self, batch: WriteBatch) -> StoreResult<()> {
        let mut collections = self.collections.write().await;

        // Check every target first so a failed batch leaves nothing applied.
        for update in batch.updates() {
            let exists = collections
                .get(&update.collection)
                .is_some_and(|docs| docs.contains_key(&update.id));
            if !exists {
                return Err(StoreError::document_not_found(&update.collection, &update.id));
            }
        }

        let applied = batch.len();
        for update in batch.into_updates() {
            if let Some(fields) = collections
                .get_mut(&update.collection)
                .and_then(|docs| docs.get_mut(&update.id))
            {
                merge_patch(fields, update.fields);
            }
        }

        debug!("Committed batch of {applied} updates");
        Ok(())
    }
}

/// RFC 7396 merge, matching SQLite's `json_patch`.
fn merge_patch(target: &mut Fields, patch: Fields) {
    for (key, value) in patch {
        match value {
            Value::Null => {
                target.remove(&key);
            }
            Value::Object(nested_patch) => {
                let entry = target
                    .entry(key)
                    .or_insert_with(|| Value::Object(Fields::new()));
                if !entry.is_object() {
                    *entry = Value::Object(Fields::new());
                }
                if let Value::Object(nested_target) = entry {
                    merge_patch(nested_target, nested_patch);
                }
            }
            other => {
                target.insert(key, other);
            }
        }
    }
}
