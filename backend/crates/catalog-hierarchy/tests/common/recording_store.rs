use catalog_store::{
    Document, DocumentStore, Filter, MemoryStore, Query, StoreResult, WriteBatch,
};

use std::sync::Mutex;

use async_trait::async_trait;

/// Which store call a recorded query went through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryKind {
    Query,
    Count,
}

/// `MemoryStore` wrapper that remembers every query and commit.
#[derive(Default)]
pub struct RecordingStore {
    inner: MemoryStore,
    queries: Mutex<Vec<(QueryKind, Query)>>,
    commits: Mutex<Vec<WriteBatch>>,
}

impl RecordingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn queries(&self) -> Vec<(QueryKind, Query)> {
        self.queries.lock().unwrap().clone()
    }

    pub fn commits(&self) -> Vec<WriteBatch> {
        self.commits.lock().unwrap().clone()
    }

    pub fn clear(&self) {
        self.queries.lock().unwrap().clear();
        self.commits.lock().unwrap().clear();
    }

    /// Sizes of every `in` filter sent to `collection`, in call order.
    pub fn in_filter_sizes(&self, kind: QueryKind, collection: &str) -> Vec<usize> {
        self.queries()
            .into_iter()
            .filter(|(k, q)| *k == kind && q.collection == collection)
            .flat_map(|(_, q)| {
                q.filters
                    .into_iter()
                    .filter_map(|filter| match filter {
                        Filter::In { values, .. } => Some(values.len()),
                        _ => None,
                    })
                    .collect::<Vec<_>>()
            })
            .collect()
    }

    fn record(&self, kind: QueryKind, query: &Query) {
        self.queries.lock().unwrap().push((kind, query.clone()));
    }
}

#[async_trait]
impl DocumentStore for RecordingStore {
    async fn get(&self, collection: &str, id: &str) -> StoreResult<Option<Document>> {
        self.inner.get(collection, id).await
    }

    async fn query(&self, query: &Query) -> StoreResult<Vec<Document>> {
        self.record(QueryKind::Query, query);
        self.inner.query(query).await
    }

    async fn count(&self, query: &Query) -> StoreResult<u64> {
        self.record(QueryKind::Count, query);
        self.inner.count(query).await
    }

    async fn set(&self, collection: &str, document: Document) -> StoreResult<()> {
        self.inner.set(collection, document).await
    }

    async fn commit(&self, batch: WriteBatch) -> StoreResult<()> {
        self.commits.lock().unwrap().push(batch.clone());
        self.inner.commit(batch).await
    }
}
