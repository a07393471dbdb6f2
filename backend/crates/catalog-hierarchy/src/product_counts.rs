//! Product counting and maintenance of the denormalized `product_count`.
//!
//! There are two ways to count. [`CategoryHierarchy::count_category_products`]
//! is the cheap estimate: a leaf counts its own products and a parent sums
//! whatever its children currently store. [`CategoryHierarchy::recompute_category_count`]
//! is authoritative: it counts live products across the whole subtree.
//! Stored counts are only ever written from the authoritative path.

use crate::{CategoryHierarchy, HierarchyResult};

use catalog_core::fields::{
    CATEGORIES_COLLECTION, FIELD_CATEGORY_ID, FIELD_IS_DELETED, FIELD_PRODUCT_COUNT, FIELD_STATUS,
    PRODUCTS_COLLECTION,
};
use catalog_core::{Category, Fields, ProductStatus, RebuildReport};
use catalog_store::{DocumentStore, Query, WriteBatch};

use futures::StreamExt;
use futures::stream;
use log::{debug, info, warn};
use serde_json::Value;

impl<S: DocumentStore> CategoryHierarchy<S> {
    /// Published, non-deleted products filed directly under `category_id`.
    pub async fn count_leaf_category_products(&self, category_id: &str) -> HierarchyResult<u64> {
        let query = Self::live_products_query().where_eq(FIELD_CATEGORY_ID, category_id);
        Ok(self.store.count(&query).await?)
    }

    /// Sum of the stored `product_count` of the direct children.
    ///
    /// A category without children falls back to a leaf count. Children
    /// that exist but have not been visible yet are therefore treated as no
    /// children at all.
    pub async fn count_parent_category_products(&self, category_id: &str) -> HierarchyResult<u64> {
        let children = self.store.query(&Self::children_query(category_id)).await?;

        if children.is_empty() {
            return self.count_leaf_category_products(category_id).await;
        }

        let mut total: u64 = 0;
        for child in &children {
            let category = Category::from_fields(&child.id, &child.fields)?;
            total = total.saturating_add(category.product_count);
        }

        Ok(total)
    }

    /// Estimated count; see the module docs.
    pub async fn count_category_products(&self, category_id: &str) -> HierarchyResult<u64> {
        if self.is_category_leaf(category_id).await? {
            self.count_leaf_category_products(category_id).await
        } else {
            self.count_parent_category_products(category_id).await
        }
    }

    /// Exact count of live products in the category and all descendants.
    pub async fn recompute_category_count(&self, category_id: &str) -> HierarchyResult<u64> {
        let ids = self.get_category_ids_for_query(category_id).await?;
        let chunk_size = self.chunk_size();

        let mut total: u64 = 0;
        for chunk in ids.chunks(chunk_size) {
            let query =
                Self::live_products_query().where_in(FIELD_CATEGORY_ID, chunk.iter().cloned());
            total = total.saturating_add(self.store.count(&query).await?);
        }

        debug!(
            "Category {category_id}: {total} products across {} categories ({} queries)",
            ids.len(),
            ids.len().div_ceil(chunk_size)
        );
        Ok(total)
    }

    /// Recompute `product_count` for the category and every ancestor and
    /// write them in one batch. Returns how many categories were written.
    ///
    /// A missing category writes nothing.
    pub async fn update_category_product_counts(&self, category_id: &str) -> HierarchyResult<usize> {
        let Some(category) = self.fetch_category(category_id).await? else {
            debug!("Category {category_id} not found, no counts to update");
            return Ok(0);
        };

        let mut batch = WriteBatch::new();
        let count = self.recompute_category_count(category_id).await?;
        batch.update(CATEGORIES_COLLECTION, category_id, count_fields(count));

        for visit in self.walk_ancestors(&category).await? {
            if visit.category.is_none() {
                continue;
            }
            let count = self.recompute_category_count(&visit.id).await?;
            batch.update(CATEGORIES_COLLECTION, visit.id, count_fields(count));
        }

        let written = batch.len();
        self.store.commit(batch).await?;

        info!("Updated product counts for {written} categories from {category_id}");
        Ok(written)
    }

    /// Recount every category. One category failing does not stop the
    /// others; its error is reported as `"<id>: <message>"` in category
    /// listing order.
    pub async fn rebuild_all_category_counts(&self) -> HierarchyResult<RebuildReport> {
        let categories = self
            .store
            .query(&Query::collection(CATEGORIES_COLLECTION))
            .await?;
        let total = categories.len();
        let concurrency = self.config.rebuild_concurrency.max(1);

        info!("Rebuilding product counts for {total} categories (concurrency {concurrency})");

        let mut outcomes: Vec<_> = stream::iter(categories.into_iter().enumerate())
            .map(|(index, doc)| async move {
                let result = self.update_category_product_counts(&doc.id).await;
                (index, doc.id, result)
            })
            .buffer_unordered(concurrency)
            .collect()
            .await;
        outcomes.sort_by_key(|(index, _, _)| *index);

        let mut report = RebuildReport::default();
        for (_, id, result) in outcomes {
            match result {
                Ok(_) => report.updated += 1,
                Err(e) => {
                    warn!("Failed to rebuild product count for {id}: {e}");
                    report.errors.push(format!("{id}: {e}"));
                }
            }
        }

        info!(
            "Rebuild finished: {} updated, {} failed",
            report.updated,
            report.errors.len()
        );
        Ok(report)
    }

    fn live_products_query() -> Query {
        Query::collection(PRODUCTS_COLLECTION)
            .where_eq(FIELD_STATUS, ProductStatus::Published.as_str())
            .where_not_eq(FIELD_IS_DELETED, true)
    }
}

fn count_fields(count: u64) -> Fields {
    let mut fields = Fields::new();
    fields.insert(FIELD_PRODUCT_COUNT.to_string(), Value::from(count));
    fields
}
