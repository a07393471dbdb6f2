use crate::{CategoryHierarchy, HierarchyResult};

use catalog_core::Category;
use catalog_store::DocumentStore;

use std::collections::{HashSet, VecDeque};

use log::{debug, warn};

/// One node reached while walking up from a category. `category` is `None`
/// when a `parentIds` entry points at a document that does not exist.
pub(crate) struct AncestorVisit {
    pub(crate) id: String,
    pub(crate) category: Option<Category>,
}

impl<S: DocumentStore> CategoryHierarchy<S> {
    /// Every category below `category_id`, breadth-first, each listed once.
    ///
    /// The starting category is never part of the result, even when
    /// corrupted data loops back to it.
    pub async fn get_all_descendant_ids(&self, category_id: &str) -> HierarchyResult<Vec<String>> {
        let mut descendants = Vec::new();
        let mut seen: HashSet<String> = HashSet::from([category_id.to_string()]);
        let mut queue: VecDeque<String> = VecDeque::from([category_id.to_string()]);

        while let Some(current) = queue.pop_front() {
            for child in self.child_ids(&current).await? {
                if child == category_id {
                    warn!("Category {category_id} is its own descendant (via {current})");
                    continue;
                }
                if seen.insert(child.clone()) {
                    descendants.push(child.clone());
                    queue.push_back(child);
                }
            }
        }

        debug!(
            "Category {category_id} has {} descendants",
            descendants.len()
        );
        Ok(descendants)
    }

    /// Every category above `category_id`, breadth-first from its direct
    /// parents. Empty when the category does not exist.
    pub async fn get_all_ancestor_ids(&self, category_id: &str) -> HierarchyResult<Vec<String>> {
        let Some(category) = self.fetch_category(category_id).await? else {
            return Ok(Vec::new());
        };

        let visits = self.walk_ancestors(&category).await?;
        Ok(visits.into_iter().map(|visit| visit.id).collect())
    }

    pub async fn is_category_leaf(&self, category_id: &str) -> HierarchyResult<bool> {
        let children = self
            .store
            .query(&Self::children_query(category_id).limit(1))
            .await?;

        Ok(children.is_empty())
    }

    pub(crate) async fn walk_ancestors(&self, start: &Category) -> HierarchyResult<Vec<AncestorVisit>> {
        let mut visits = Vec::new();
        let mut seen: HashSet<String> = HashSet::from([start.id.clone()]);
        let mut queue: VecDeque<String> = start.parent_ids.iter().cloned().collect();

        while let Some(id) = queue.pop_front() {
            if !seen.insert(id.clone()) {
                if id == start.id {
                    warn!("Category {} is its own ancestor", start.id);
                }
                continue;
            }

            let category = self.fetch_category(&id).await?;
            if let Some(parent) = &category {
                for pid in &parent.parent_ids {
                    if *pid == start.id {
                        warn!("Category {} is its own ancestor (via {id})", start.id);
                    } else if !seen.contains(pid) {
                        queue.push_back(pid.clone());
                    }
                }
            }

            visits.push(AncestorVisit { id, category });
        }

        debug!("Category {} has {} ancestors", start.id, visits.len());
        Ok(visits)
    }

    async fn child_ids(&self, parent_id: &str) -> HierarchyResult<Vec<String>> {
        let children = self.store.query(&Self::children_query(parent_id)).await?;
        Ok(children.into_iter().map(|doc| doc.id).collect())
    }
}
