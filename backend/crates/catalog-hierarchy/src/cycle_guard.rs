use crate::{CategoryHierarchy, HierarchyResult};

use catalog_core::ParentValidation;
use catalog_store::DocumentStore;

use std::collections::HashSet;

pub const SELF_PARENT_ERROR: &str = "A category cannot be its own parent";

impl<S: DocumentStore> CategoryHierarchy<S> {
    /// Whether making `new_parent_id` a parent of `category_id` would close
    /// a loop. A category is always its own cycle; otherwise the candidate
    /// must not already sit below the category.
    pub async fn would_create_cycle(
        &self,
        category_id: &str,
        new_parent_id: &str,
    ) -> HierarchyResult<bool> {
        if category_id == new_parent_id {
            return Ok(true);
        }

        let descendants = self.get_all_descendant_ids(category_id).await?;
        Ok(descendants.iter().any(|id| id == new_parent_id))
    }

    /// Check a proposed `parentIds` list without writing anything.
    ///
    /// All checks run for every candidate and every failure is reported, so
    /// a self-reference shows up both as a self-parent and as a cycle.
    pub async fn validate_parent_assignments(
        &self,
        category_id: &str,
        parent_ids: &[String],
    ) -> HierarchyResult<ParentValidation> {
        if parent_ids.is_empty() {
            return Ok(ParentValidation::from_errors(Vec::new()));
        }

        let mut errors = Vec::new();

        if parent_ids.iter().any(|pid| pid == category_id) {
            errors.push(SELF_PARENT_ERROR.to_string());
        }

        // Same answer as would_create_cycle per candidate, one traversal total
        let descendants: HashSet<String> = self
            .get_all_descendant_ids(category_id)
            .await?
            .into_iter()
            .collect();

        for pid in parent_ids {
            if pid == category_id || descendants.contains(pid) {
                errors.push(format!(
                    "Setting {pid} as parent would create a circular reference"
                ));
            }
        }

        for pid in parent_ids {
            if !self.category_exists(pid).await? {
                errors.push(format!("Parent category {pid} does not exist"));
            }
        }

        Ok(ParentValidation::from_errors(errors))
    }
}
