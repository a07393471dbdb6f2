mod traversal;

use crate::CategoryHierarchy;

use catalog_config::HierarchyConfig;
use catalog_core::Fields;
use catalog_core::fields::{CATEGORIES_COLLECTION, PRODUCTS_COLLECTION};
use catalog_store::{Document, DocumentStore, MemoryStore};

use std::sync::Arc;

use serde_json::{Value, json};

pub(crate) fn fields(value: Value) -> Fields {
    match value {
        Value::Object(map) => map,
        _ => panic!("fixture must be an object"),
    }
}

/// Collects documents, then writes them all into a fresh `MemoryStore`.
#[derive(Default)]
pub(crate) struct CatalogBuilder {
    documents: Vec<(&'static str, Document)>,
    config: HierarchyConfig,
}

impl CatalogBuilder {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn category(self, id: &str, parents: &[&str]) -> Self {
        self.category_doc(id, json!({ "name": id, "parentIds": parents }))
    }

    pub(crate) fn category_doc(mut self, id: &str, doc: Value) -> Self {
        self.documents
            .push((CATEGORIES_COLLECTION, Document::new(id, fields(doc))));
        self
    }

    pub(crate) fn product(self, id: &str, category_id: &str, status: &str) -> Self {
        self.product_doc(id, json!({ "category_id": category_id, "status": status }))
    }

    pub(crate) fn product_doc(mut self, id: &str, doc: Value) -> Self {
        self.documents
            .push((PRODUCTS_COLLECTION, Document::new(id, fields(doc))));
        self
    }

    pub(crate) fn config(mut self, config: HierarchyConfig) -> Self {
        self.config = config;
        self
    }

    pub(crate) async fn build(self) -> CategoryHierarchy<MemoryStore> {
        let store = MemoryStore::new();
        for (collection, document) in self.documents {
            store.set(collection, document).await.unwrap();
        }
        CategoryHierarchy::with_config(Arc::new(store), self.config)
    }
}

pub(crate) async fn stored_field(
    hierarchy: &CategoryHierarchy<MemoryStore>,
    id: &str,
    field: &str,
) -> Option<Value> {
    hierarchy
        .store()
        .get(CATEGORIES_COLLECTION, id)
        .await
        .unwrap()
        .and_then(|doc| doc.fields.get(field).cloned())
}
