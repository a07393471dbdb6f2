use crate::{Category, CoreError, Fields};

use googletest::prelude::*;
use serde_json::json;

fn fields(value: serde_json::Value) -> Fields {
    match value {
        serde_json::Value::Object(map) => map,
        _ => panic!("fixture must be an object"),
    }
}

#[test]
fn given_full_document_when_decoded_then_all_fields_populated() {
    // Given
    let doc = fields(json!({
        "name": "Shoes",
        "parentIds": ["apparel", "sale"],
        "level": 2,
        "product_count": 14
    }));

    // When
    let category = Category::from_fields("shoes", &doc).unwrap();

    // Then
    assert_that!(category.id.as_str(), eq("shoes"));
    assert_that!(category.parent_ids, elements_are![eq("apparel"), eq("sale")]);
    assert_that!(category.level, eq(2));
    assert_that!(category.product_count, eq(14));
    assert_that!(category.is_root(), eq(false));
}

#[test]
fn given_sparse_document_when_decoded_then_defaults_apply() {
    // Given: only an unrelated field is present
    let doc = fields(json!({ "slug": "misc" }));

    // When
    let category = Category::from_fields("misc", &doc).unwrap();

    // Then
    assert_that!(category.parent_ids, is_empty());
    assert_that!(category.level, eq(0));
    assert_that!(category.product_count, eq(0));
    assert_that!(category.is_root(), eq(true));
}

#[test]
fn given_null_fields_when_decoded_then_treated_as_missing() {
    // Given
    let doc = fields(json!({
        "parentIds": null,
        "level": null,
        "product_count": null
    }));

    // When
    let category = Category::from_fields("nulls", &doc).unwrap();

    // Then
    assert_that!(category.parent_ids, is_empty());
    assert_that!(category.level, eq(0));
    assert_that!(category.product_count, eq(0));
}

#[test]
fn given_malformed_parent_ids_when_decoded_then_decode_error_names_category() {
    // Given
    let doc = fields(json!({ "parentIds": 42 }));

    // When
    let result = Category::from_fields("broken", &doc);

    // Then
    assert!(matches!(result, Err(CoreError::Decode { entity: "category", .. })));
    assert_that!(
        result.unwrap_err().to_string(),
        contains_substring("broken")
    );
}

#[test]
fn given_non_string_name_when_decoded_then_hierarchy_fields_still_read() {
    // Given: a localized name map alongside the hierarchy fields
    let doc = fields(json!({
        "name": { "en": "Shoes", "de": "Schuhe" },
        "parentIds": ["apparel"],
        "level": 1
    }));

    // When
    let category = Category::from_fields("shoes", &doc).unwrap();

    // Then
    assert_that!(category.parent_ids, elements_are![eq("apparel")]);
    assert_that!(category.level, eq(1));
}
