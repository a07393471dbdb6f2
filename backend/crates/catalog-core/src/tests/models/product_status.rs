use crate::ProductStatus;

use std::str::FromStr;

use googletest::prelude::*;
use serde_json::json;

#[test]
fn given_known_statuses_when_parsed_then_round_trip_through_as_str() {
    for status in [
        ProductStatus::Draft,
        ProductStatus::Published,
        ProductStatus::Archived,
    ] {
        let parsed = ProductStatus::from_str(status.as_str());
        assert_that!(parsed, ok(eq(&status)));
    }
}

#[test]
fn given_unknown_status_when_parsed_then_preserved_as_other() {
    // When
    let parsed = ProductStatus::from_str("pending_review");

    // Then
    assert_that!(parsed, ok(eq(&ProductStatus::Other("pending_review".to_string()))));
}

#[test]
fn given_status_casing_differs_when_parsed_then_not_folded() {
    let parsed = ProductStatus::from("PUBLISHED".to_string());

    assert_that!(parsed, eq(&ProductStatus::Other("PUBLISHED".to_string())));
}

#[test]
fn given_unknown_status_when_decoded_then_preserved_as_other() {
    // When
    let status: ProductStatus = serde_json::from_value(json!("pending_review")).unwrap();

    // Then
    assert_that!(status, eq(&ProductStatus::Other("pending_review".to_string())));
    assert_that!(serde_json::to_value(&status).unwrap(), eq(&json!("pending_review")));
}
