//! Category hierarchy engine.
//!
//! Traverses the multi-parent category graph stored in a
//! [`DocumentStore`](catalog_store::DocumentStore), guards parent
//! assignments against cycles and maintains the denormalized
//! `product_count` of every category.

mod category_hierarchy;
mod cycle_guard;
mod error;
mod levels;
mod product_counts;
mod query_helpers;
mod traversal;

#[cfg(test)]
mod tests;

pub use category_hierarchy::CategoryHierarchy;
pub use cycle_guard::SELF_PARENT_ERROR;
pub use error::{HierarchyError, Result as HierarchyResult};
