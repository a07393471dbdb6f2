use crate::ProductStatus;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProductQueryOptions {
    /// Only return products in this state. `None` returns every live state.
    pub status: Option<ProductStatus>,
    /// Cap on the total number of ids returned across all query chunks.
    pub limit: Option<usize>,
}

impl ProductQueryOptions {
    pub fn with_status(mut self, status: ProductStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}
