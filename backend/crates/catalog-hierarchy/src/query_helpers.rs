use crate::{CategoryHierarchy, HierarchyResult};

use catalog_core::ProductQueryOptions;
use catalog_core::fields::{FIELD_CATEGORY_ID, FIELD_IS_DELETED, FIELD_STATUS, PRODUCTS_COLLECTION};
use catalog_store::{DocumentStore, Query};

use log::debug;

impl<S: DocumentStore> CategoryHierarchy<S> {
    /// `category_id` followed by all of its descendants.
    pub async fn get_category_ids_for_query(&self, category_id: &str) -> HierarchyResult<Vec<String>> {
        let descendants = self.get_all_descendant_ids(category_id).await?;

        let mut ids = Vec::with_capacity(descendants.len() + 1);
        ids.push(category_id.to_string());
        ids.extend(descendants);
        Ok(ids)
    }

    /// Ids of non-deleted products in the category's subtree.
    ///
    /// Products are fetched one id chunk at a time, in chunk order. With a
    /// limit, each chunk only asks for what is still missing and the walk
    /// stops as soon as the limit is reached.
    pub async fn get_category_products(
        &self,
        category_id: &str,
        options: &ProductQueryOptions,
    ) -> HierarchyResult<Vec<String>> {
        if options.limit == Some(0) {
            return Ok(Vec::new());
        }

        let category_ids = self.get_category_ids_for_query(category_id).await?;
        let mut product_ids: Vec<String> = Vec::new();

        for chunk in category_ids.chunks(self.chunk_size()) {
            let mut query = Query::collection(PRODUCTS_COLLECTION)
                .where_in(FIELD_CATEGORY_ID, chunk.iter().cloned())
                .where_not_eq(FIELD_IS_DELETED, true);

            if let Some(status) = &options.status {
                query = query.where_eq(FIELD_STATUS, status.as_str());
            }
            if let Some(limit) = options.limit {
                query = query.limit(limit.saturating_sub(product_ids.len()));
            }

            let documents = self.store.query(&query).await?;
            product_ids.extend(documents.into_iter().map(|doc| doc.id));

            if options.limit.is_some_and(|limit| product_ids.len() >= limit) {
                break;
            }
        }

        debug!(
            "Found {} products under category {category_id}",
            product_ids.len()
        );
        Ok(product_ids)
    }
}
