use crate::tests::CatalogBuilder;

use googletest::prelude::*;

#[tokio::test]
async fn given_chain_when_getting_descendants_then_breadth_first_order() {
    // Given: A <- B <- C, A <- D
    let hierarchy = CatalogBuilder::new()
        .category("A", &[])
        .category("B", &["A"])
        .category("C", &["B"])
        .category("D", &["A"])
        .build()
        .await;

    // When
    let descendants = hierarchy.get_all_descendant_ids("A").await.unwrap();

    // Then
    assert_that!(descendants, elements_are![eq("B"), eq("D"), eq("C")]);
}

#[tokio::test]
async fn given_diamond_when_getting_descendants_then_shared_child_listed_once() {
    // Given: D has parents B and C, both children of A
    let hierarchy = CatalogBuilder::new()
        .category("A", &[])
        .category("B", &["A"])
        .category("C", &["A"])
        .category("D", &["B", "C"])
        .build()
        .await;

    // When
    let descendants = hierarchy.get_all_descendant_ids("A").await.unwrap();

    // Then
    assert_that!(descendants, elements_are![eq("B"), eq("C"), eq("D")]);
}

#[tokio::test]
async fn given_missing_category_when_getting_descendants_then_empty() {
    let hierarchy = CatalogBuilder::new().build().await;

    let descendants = hierarchy.get_all_descendant_ids("nope").await.unwrap();

    assert_that!(descendants, is_empty());
}

#[tokio::test]
async fn given_diamond_when_getting_ancestors_then_root_listed_once() {
    // Given
    let hierarchy = CatalogBuilder::new()
        .category("A", &[])
        .category("B", &["A"])
        .category("C", &["A"])
        .category("D", &["B", "C"])
        .build()
        .await;

    // When
    let ancestors = hierarchy.get_all_ancestor_ids("D").await.unwrap();

    // Then
    assert_that!(ancestors, elements_are![eq("B"), eq("C"), eq("A")]);
}

#[tokio::test]
async fn given_missing_category_when_getting_ancestors_then_empty() {
    let hierarchy = CatalogBuilder::new().category("A", &[]).build().await;

    let ancestors = hierarchy.get_all_ancestor_ids("ghost").await.unwrap();

    assert_that!(ancestors, is_empty());
}

#[tokio::test]
async fn given_dangling_parent_when_getting_ancestors_then_listed_without_parents() {
    // Given: "gone" was deleted but is still referenced
    let hierarchy = CatalogBuilder::new()
        .category("A", &[])
        .category("B", &["gone", "A"])
        .build()
        .await;

    // When
    let ancestors = hierarchy.get_all_ancestor_ids("B").await.unwrap();

    // Then
    assert_that!(ancestors, elements_are![eq("gone"), eq("A")]);
}

#[tokio::test]
async fn given_two_node_cycle_when_traversing_then_terminates_without_self() {
    // Given: corrupted data, A and B are each other's parent
    let hierarchy = CatalogBuilder::new()
        .category("A", &["B"])
        .category("B", &["A"])
        .build()
        .await;

    // When
    let descendants = hierarchy.get_all_descendant_ids("A").await.unwrap();
    let ancestors = hierarchy.get_all_ancestor_ids("A").await.unwrap();

    // Then
    assert_that!(descendants, elements_are![eq("B")]);
    assert_that!(ancestors, elements_are![eq("B")]);
}

#[tokio::test]
async fn given_self_parent_when_traversing_then_not_reported() {
    let hierarchy = CatalogBuilder::new().category("A", &["A"]).build().await;

    let descendants = hierarchy.get_all_descendant_ids("A").await.unwrap();
    let ancestors = hierarchy.get_all_ancestor_ids("A").await.unwrap();

    assert_that!(descendants, is_empty());
    assert_that!(ancestors, is_empty());
}

#[tokio::test]
async fn given_parent_edge_when_traversing_both_ways_then_each_side_sees_the_other() {
    // Given
    let hierarchy = CatalogBuilder::new()
        .category("root", &[])
        .category("mid", &["root"])
        .category("leaf", &["mid", "root"])
        .build()
        .await;

    // When / Then: every parent edge shows up in both directions
    for (child, parent) in [("mid", "root"), ("leaf", "mid"), ("leaf", "root")] {
        let ancestors = hierarchy.get_all_ancestor_ids(child).await.unwrap();
        let descendants = hierarchy.get_all_descendant_ids(parent).await.unwrap();

        assert_that!(ancestors, contains(eq(parent)));
        assert_that!(descendants, contains(eq(child)));
    }
}

#[tokio::test]
async fn given_category_with_child_when_checking_leaf_then_false() {
    // Given
    let hierarchy = CatalogBuilder::new()
        .category("A", &[])
        .category("B", &["A"])
        .build()
        .await;

    // When
    let a_is_leaf = hierarchy.is_category_leaf("A").await.unwrap();
    let b_is_leaf = hierarchy.is_category_leaf("B").await.unwrap();

    // Then
    assert_that!(a_is_leaf, eq(false));
    assert_that!(b_is_leaf, eq(true));
}

#[tokio::test]
async fn given_ancestor_with_localized_name_when_walking_up_then_hierarchy_still_read() {
    // Given: the root's name is a map rather than a string
    let hierarchy = CatalogBuilder::new()
        .category_doc(
            "root",
            serde_json::json!({ "name": { "en": "Root", "fr": "Racine" }, "parentIds": [] }),
        )
        .category("child", &["root"])
        .build()
        .await;

    // When
    let ancestors = hierarchy.get_all_ancestor_ids("child").await.unwrap();
    let level = hierarchy.calculate_category_level("child").await.unwrap();

    // Then
    assert_that!(ancestors, elements_are![eq("root")]);
    assert_that!(level, eq(1));
}
