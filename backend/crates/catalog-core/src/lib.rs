pub mod error;
pub mod fields;
pub mod models;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result as CoreResult};
pub use error_location::ErrorLocation;
pub use models::category::Category;
pub use models::parent_validation::ParentValidation;
pub use models::product_query_options::ProductQueryOptions;
pub use models::product_status::ProductStatus;
pub use models::rebuild_report::RebuildReport;

/// Document map shape shared by every stored entity.
pub type Fields = serde_json::Map<String, serde_json::Value>;
