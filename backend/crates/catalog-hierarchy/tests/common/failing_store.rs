use catalog_core::ErrorLocation;
use catalog_store::{
    Document, DocumentStore, MemoryStore, Query, StoreError, StoreResult, WriteBatch,
};

use std::collections::HashSet;
use std::panic::Location;

use async_trait::async_trait;

pub const INJECTED_FAILURE: &str = "injected read failure";

/// `MemoryStore` wrapper whose point reads fail for chosen ids.
#[derive(Default)]
pub struct FailingStore {
    inner: MemoryStore,
    failing_ids: HashSet<String>,
}

impl FailingStore {
    pub fn new<I, S>(failing_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            inner: MemoryStore::new(),
            failing_ids: failing_ids.into_iter().map(Into::into).collect(),
        }
    }
}

#[async_trait]
impl DocumentStore for FailingStore {
    async fn get(&self, collection: &str, id: &str) -> StoreResult<Option<Document>> {
        if self.failing_ids.contains(id) {
            return Err(StoreError::Initialization {
                message: format!("{INJECTED_FAILURE} for {collection}/{id}"),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        self.inner.get(collection, id).await
    }

    async fn query(&self, query: &Query) -> StoreResult<Vec<Document>> {
        self.inner.query(query).await
    }

    async fn count(&self, query: &Query) -> StoreResult<u64> {
        self.inner.count(query).await
    }

    async fn set(&self, collection: &str, document: Document) -> StoreResult<()> {
        self.inner.set(collection, document).await
    }

    async fn commit(&self, batch: WriteBatch) -> StoreResult<()> {
        self.inner.commit(batch).await
    }
}
