//! Collection and field names as they appear in the document store.
//!
//! Stored documents predate this crate, so the names keep their existing
//! (mixed) casing: `parentIds` is camelCase while the rest are snake_case.

pub const CATEGORIES_COLLECTION: &str = "categories";
pub const PRODUCTS_COLLECTION: &str = "products";

pub const FIELD_PARENT_IDS: &str = "parentIds";
pub const FIELD_LEVEL: &str = "level";
pub const FIELD_PRODUCT_COUNT: &str = "product_count";

pub const FIELD_CATEGORY_ID: &str = "category_id";
pub const FIELD_STATUS: &str = "status";
pub const FIELD_IS_DELETED: &str = "is_deleted";
