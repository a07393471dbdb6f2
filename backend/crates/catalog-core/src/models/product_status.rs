use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Product lifecycle state. Only `Published` products are counted.
///
/// Statuses written by other services are preserved as `Other`, both when
/// decoding documents and when parsing user input.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ProductStatus {
    Draft,
    Published,
    Archived,
    Other(String),
}

impl ProductStatus {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Draft => "draft",
            Self::Published => "published",
            Self::Archived => "archived",
            Self::Other(value) => value,
        }
    }
}

impl fmt::Display for ProductStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProductStatus {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s.to_string()))
    }
}

impl From<String> for ProductStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "draft" => Self::Draft,
            "published" => Self::Published,
            "archived" => Self::Archived,
            _ => Self::Other(value),
        }
    }
}

impl From<ProductStatus> for String {
    fn from(status: ProductStatus) -> Self {
        match status {
            ProductStatus::Other(value) => value,
            known => known.as_str().to_string(),
        }
    }
}
