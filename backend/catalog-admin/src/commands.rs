use crate::AdminResult;

use catalog_core::{ProductQueryOptions, ProductStatus};
use catalog_hierarchy::CategoryHierarchy;
use catalog_store::DocumentStore;

use clap::Subcommand;
use serde_json::{Value, json};

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// List every category below a category
    Descendants { id: String },

    /// List every category above a category
    Ancestors { id: String },

    /// Show the level implied by a category's parents
    Level {
        id: String,

        /// Store the calculated level on the category
        #[arg(long)]
        write: bool,
    },

    /// Check whether a category has no children
    IsLeaf { id: String },

    /// Check a proposed parent list without changing anything
    ValidateParents {
        id: String,

        /// Proposed parent ids
        parents: Vec<String>,
    },

    /// Count live products in a category
    Count {
        id: String,

        /// Recount the whole subtree instead of summing stored child counts
        #[arg(long)]
        exact: bool,
    },

    /// Recompute stored product counts for a category and its ancestors
    UpdateCounts { id: String },

    /// Recompute stored product counts for every category
    RebuildCounts,

    /// List non-deleted products in a category's subtree
    Products {
        id: String,

        /// Only products with this status (draft, published, archived or any custom value)
        #[arg(long)]
        status: Option<String>,

        /// Maximum number of product ids to return
        #[arg(long)]
        limit: Option<usize>,
    },
}

/// Run one command and return its JSON result.
pub async fn execute<S: DocumentStore>(
    hierarchy: &CategoryHierarchy<S>,
    command: Commands,
) -> AdminResult<Value> {
    let value = match command {
        Commands::Descendants { id } => {
            let descendants = hierarchy.get_all_descendant_ids(&id).await?;
            json!({ "id": id, "descendants": descendants })
        }
        Commands::Ancestors { id } => {
            let ancestors = hierarchy.get_all_ancestor_ids(&id).await?;
            json!({ "id": id, "ancestors": ancestors })
        }
        Commands::Level { id, write: false } => {
            let level = hierarchy.calculate_category_level(&id).await?;
            json!({ "id": id, "level": level, "written": false })
        }
        Commands::Level { id, write: true } => match hierarchy.refresh_category_level(&id).await? {
            Some(level) => json!({ "id": id, "level": level, "written": true }),
            None => json!({ "id": id, "level": 0, "written": false }),
        },
        Commands::IsLeaf { id } => {
            let leaf = hierarchy.is_category_leaf(&id).await?;
            json!({ "id": id, "leaf": leaf })
        }
        Commands::ValidateParents { id, parents } => {
            let validation = hierarchy.validate_parent_assignments(&id, &parents).await?;
            serde_json::to_value(validation)?
        }
        Commands::Count { id, exact } => {
            let count = if exact {
                hierarchy.recompute_category_count(&id).await?
            } else {
                hierarchy.count_category_products(&id).await?
            };
            json!({ "id": id, "product_count": count, "exact": exact })
        }
        Commands::UpdateCounts { id } => {
            let updated = hierarchy.update_category_product_counts(&id).await?;
            json!({ "id": id, "updated": updated })
        }
        Commands::RebuildCounts => {
            let report = hierarchy.rebuild_all_category_counts().await?;
            serde_json::to_value(report)?
        }
        Commands::Products { id, status, limit } => {
            let options = ProductQueryOptions {
                status: status.map(ProductStatus::from),
                limit,
            };
            let products = hierarchy.get_category_products(&id, &options).await?;
            json!({ "id": id, "products": products })
        }
    };

    Ok(value)
}

pub fn render(value: &Value, pretty: bool) -> AdminResult<String> {
    let output = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(output)
}
