use catalog_core::Fields;
use catalog_core::fields::{CATEGORIES_COLLECTION, PRODUCTS_COLLECTION};
use catalog_store::{Document, DocumentStore};

use serde_json::{Value, json};

pub fn fields(value: Value) -> Fields {
    match value {
        Value::Object(map) => map,
        _ => panic!("fixture must be an object"),
    }
}

pub async fn seed_category<S: DocumentStore>(store: &S, id: &str, parents: &[&str]) {
    store
        .set(
            CATEGORIES_COLLECTION,
            Document::new(id, fields(json!({ "name": id, "parentIds": parents }))),
        )
        .await
        .expect("Failed to seed category");
}

pub async fn seed_product<S: DocumentStore>(store: &S, id: &str, doc: Value) {
    store
        .set(PRODUCTS_COLLECTION, Document::new(id, fields(doc)))
        .await
        .expect("Failed to seed product");
}

pub async fn seed_published<S: DocumentStore>(store: &S, id: &str, category_id: &str) {
    seed_product(
        store,
        id,
        json!({ "category_id": category_id, "status": "published" }),
    )
    .await;
}

/// `root` with `count` direct children `c00..`, each holding one
/// published product.
pub async fn seed_wide_tree<S: DocumentStore>(store: &S, count: usize) {
    seed_category(store, "root", &[]).await;
    for i in 0..count {
        let id = format!("c{i:02}");
        seed_category(store, &id, &["root"]).await;
        seed_published(store, &format!("p{i:02}"), &id).await;
    }
}

pub async fn stored_field<S: DocumentStore>(store: &S, id: &str, field: &str) -> Option<Value> {
    store
        .get(CATEGORIES_COLLECTION, id)
        .await
        .expect("Failed to read category")
        .and_then(|doc| doc.fields.get(field).cloned())
}
