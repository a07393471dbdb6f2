use crate::{CategoryHierarchy, HierarchyResult};

use catalog_core::fields::{CATEGORIES_COLLECTION, FIELD_LEVEL};
use catalog_core::{Category, Fields};
use catalog_store::{DocumentStore, WriteBatch};

use log::debug;
use serde_json::Value;

impl<S: DocumentStore> CategoryHierarchy<S> {
    /// Depth implied by the stored levels of the direct parents: `0` for a
    /// root or a missing category, else one more than the deepest parent.
    ///
    /// Only direct parents are read, so the result is as fresh as their
    /// stored `level` values.
    pub async fn calculate_category_level(&self, category_id: &str) -> HierarchyResult<u32> {
        match self.fetch_category(category_id).await? {
            Some(category) => self.level_from_parents(&category).await,
            None => Ok(0),
        }
    }

    /// Recalculate and persist `level`. `None` when the category is missing.
    pub async fn refresh_category_level(&self, category_id: &str) -> HierarchyResult<Option<u32>> {
        let Some(category) = self.fetch_category(category_id).await? else {
            return Ok(None);
        };

        let level = self.level_from_parents(&category).await?;

        let mut fields = Fields::new();
        fields.insert(FIELD_LEVEL.to_string(), Value::from(level));
        let mut batch = WriteBatch::new();
        batch.update(CATEGORIES_COLLECTION, category_id, fields);
        self.store.commit(batch).await?;

        debug!("Category {category_id} level set to {level}");
        Ok(Some(level))
    }

    async fn level_from_parents(&self, category: &Category) -> HierarchyResult<u32> {
        if category.is_root() {
            return Ok(0);
        }

        let mut deepest = 0;
        for pid in &category.parent_ids {
            let parent_level = self
                .fetch_category(pid)
                .await?
                .map_or(0, |parent| parent.level);
            deepest = deepest.max(parent_level);
        }

        Ok(deepest.saturating_add(1))
    }
}
