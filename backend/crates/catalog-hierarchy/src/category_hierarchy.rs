use crate::HierarchyResult;

use catalog_config::HierarchyConfig;
use catalog_core::Category;
use catalog_core::fields::{CATEGORIES_COLLECTION, FIELD_PARENT_IDS};
use catalog_store::{DocumentStore, MAX_IN_FILTER_VALUES, Query};

use std::sync::Arc;

/// Entry point for every hierarchy operation.
///
/// Holds no state besides the store handle and tuning, so it is cheap to
/// clone and safe to share between tasks.
pub struct CategoryHierarchy<S: DocumentStore> {
    pub(crate) store: Arc<S>,
    pub(crate) config: HierarchyConfig,
}

impl<S: DocumentStore> Clone for CategoryHierarchy<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            config: self.config.clone(),
        }
    }
}

impl<S: DocumentStore> CategoryHierarchy<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self::with_config(store, HierarchyConfig::default())
    }

    pub fn with_config(store: Arc<S>, config: HierarchyConfig) -> Self {
        Self { store, config }
    }

    pub fn store(&self) -> &Arc<S> {
        &self.store
    }

    pub fn config(&self) -> &HierarchyConfig {
        &self.config
    }

    /// Ids per `in` query, clamped to what the store accepts.
    pub(crate) fn chunk_size(&self) -> usize {
        self.config
            .in_query_chunk_size
            .clamp(1, MAX_IN_FILTER_VALUES)
    }

    pub(crate) async fn fetch_category(&self, id: &str) -> HierarchyResult<Option<Category>> {
        let Some(document) = self.store.get(CATEGORIES_COLLECTION, id).await? else {
            return Ok(None);
        };

        Ok(Some(Category::from_fields(&document.id, &document.fields)?))
    }

    pub(crate) async fn category_exists(&self, id: &str) -> HierarchyResult<bool> {
        Ok(self.store.get(CATEGORIES_COLLECTION, id).await?.is_some())
    }

    pub(crate) fn children_query(parent_id: &str) -> Query {
        Query::collection(CATEGORIES_COLLECTION).where_array_contains(FIELD_PARENT_IDS, parent_id)
    }
}
