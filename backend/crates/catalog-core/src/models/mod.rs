pub mod category;
pub mod parent_validation;
pub mod product_query_options;
pub mod product_status;
pub mod rebuild_report;

use serde::{Deserialize, Deserializer};

/// Treats an explicit `null` the same as a missing field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
