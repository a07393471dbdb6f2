//! Query shapes supported by every store backend.
//!
//! Filters are conjunctive. A missing field compares as JSON `null`, so
//! `NotEquals("is_deleted", true)` matches documents that never had the
//! flag written.

use crate::{StoreError, StoreResult};

use catalog_core::Fields;

use serde_json::Value;

/// Largest value list an `In` filter may carry. Callers chunk longer lists.
pub const MAX_IN_FILTER_VALUES: usize = 10;

#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    Equals { field: String, value: Value },
    NotEquals { field: String, value: Value },
    ArrayContains { field: String, value: Value },
    In { field: String, values: Vec<Value> },
}

impl Filter {
    pub fn field(&self) -> &str {
        match self {
            Self::Equals { field, .. }
            | Self::NotEquals { field, .. }
            | Self::ArrayContains { field, .. }
            | Self::In { field, .. } => field,
        }
    }

    pub fn matches(&self, fields: &Fields) -> bool {
        let actual = fields.get(self.field()).unwrap_or(&Value::Null);

        match self {
            Self::Equals { value, .. } => actual == value,
            Self::NotEquals { value, .. } => actual != value,
            Self::ArrayContains { value, .. } => actual
                .as_array()
                .is_some_and(|items| items.iter().any(|item| item == value)),
            Self::In { values, .. } => !actual.is_null() && values.contains(actual),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    pub collection: String,
    pub filters: Vec<Filter>,
    pub limit: Option<usize>,
}

impl Query {
    pub fn collection(collection: impl Into<String>) -> Self {
        Self {
            collection: collection.into(),
            filters: Vec::new(),
            limit: None,
        }
    }

    pub fn where_eq(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.filters.push(Filter::Equals {
            field: field.into(),
            value: value.into(),
        });
        self
    }

    pub fn where_not_eq(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.filters.push(Filter::NotEquals {
            field: field.into(),
            value: value.into(),
        });
        self
    }

    pub fn where_array_contains(
        mut self,
        field: impl Into<String>,
        value: impl Into<Value>,
    ) -> Self {
        self.filters.push(Filter::ArrayContains {
            field: field.into(),
            value: value.into(),
        });
        self
    }

    pub fn where_in<I, V>(mut self, field: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.filters.push(Filter::In {
            field: field.into(),
            values: values.into_iter().map(Into::into).collect(),
        });
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn matches(&self, fields: &Fields) -> bool {
        self.filters.iter().all(|filter| filter.matches(fields))
    }

    /// Reject shapes the production store refuses: empty or oversized `In`
    /// lists. Field names are limited to `[A-Za-z0-9_]` so backends can
    /// embed them in JSON paths.
    #[track_caller]
    pub fn validate(&self) -> StoreResult<()> {
        for filter in &self.filters {
            if !is_plain_field_name(filter.field()) {
                return Err(StoreError::invalid_query(format!(
                    "unsupported field name '{}'",
                    filter.field()
                )));
            }

            if let Filter::In { field, values } = filter {
                if values.is_empty() {
                    return Err(StoreError::invalid_query(format!(
                        "'in' filter on '{field}' needs at least one value"
                    )));
                }
                if values.len() > MAX_IN_FILTER_VALUES {
                    return Err(StoreError::invalid_query(format!(
                        "'in' filter on '{field}' has {} values (max {MAX_IN_FILTER_VALUES})",
                        values.len()
                    )));
                }
            }
        }

        Ok(())
    }
}

pub(crate) fn is_plain_field_name(field: &str) -> bool {
    !field.is_empty()
        && field
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
}
