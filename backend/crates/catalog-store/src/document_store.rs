//! Abstraction over the document database backing the catalog.
//!
//! The hierarchy engine only needs point reads, conjunctive filter queries,
//! server-side counts and atomic multi-document updates. Backends are
//! expected to return query results ordered by document id.

use crate::{Document, Query, StoreResult, WriteBatch};

use async_trait::async_trait;

#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// `Ok(None)` when the document does not exist.
    async fn get(&self, collection: &str, id: &str) -> StoreResult<Option<Document>>;

    /// Documents matching every filter, ordered by id, truncated to the
    /// query's limit.
    async fn query(&self, query: &Query) -> StoreResult<Vec<Document>>;

    /// Number of matching documents. The query's limit is ignored.
    async fn count(&self, query: &Query) -> StoreResult<u64>;

    /// Create or fully replace a document.
    async fn set(&self, collection: &str, document: Document) -> StoreResult<()>;

    /// Apply every update atomically.
    async fn commit(&self, batch: WriteBatch) -> StoreResult<()>;
}
