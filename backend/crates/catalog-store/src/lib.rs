pub mod document;
pub mod document_store;
pub mod error;
pub mod memory_store;
pub mod query;
pub mod sqlite_store;
pub mod write_batch;


pub use document::Document;
pub use document_store::DocumentStore;
pub use error::{Result as StoreResult, StoreError};
pub use memory_store::MemoryStore;
pub use query::{Filter, MAX_IN_FILTER_VALUES, Query};
pub use sqlite_store::SqliteStore;
pub use write_batch::{BatchUpdate, WriteBatch};
