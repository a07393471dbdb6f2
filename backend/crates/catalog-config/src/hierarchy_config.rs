use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

// Chunk size is capped by the store's `in` filter limit
pub const MIN_IN_QUERY_CHUNK_SIZE: usize = 1;
pub const MAX_IN_QUERY_CHUNK_SIZE: usize = 10;
pub const DEFAULT_IN_QUERY_CHUNK_SIZE: usize = 10;

pub const MIN_REBUILD_CONCURRENCY: usize = 1;
pub const MAX_REBUILD_CONCURRENCY: usize = 32;
pub const DEFAULT_REBUILD_CONCURRENCY: usize = 1;

/// Tuning for the hierarchy engine.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct HierarchyConfig {
    /// Category ids per `in` query when counting or listing products
    pub in_query_chunk_size: usize,
    /// Categories recounted at once by a full rebuild (1 = sequential)
    pub rebuild_concurrency: usize,
}

impl Default for HierarchyConfig {
    fn default() -> Self {
        Self {
            in_query_chunk_size: DEFAULT_IN_QUERY_CHUNK_SIZE,
            rebuild_concurrency: DEFAULT_REBUILD_CONCURRENCY,
        }
    }
}

impl HierarchyConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.in_query_chunk_size < MIN_IN_QUERY_CHUNK_SIZE
            || self.in_query_chunk_size > MAX_IN_QUERY_CHUNK_SIZE
        {
            return Err(ConfigError::hierarchy(format!(
                "hierarchy.in_query_chunk_size must be {}-{}, got {}",
                MIN_IN_QUERY_CHUNK_SIZE, MAX_IN_QUERY_CHUNK_SIZE, self.in_query_chunk_size
            )));
        }

        if self.rebuild_concurrency < MIN_REBUILD_CONCURRENCY
            || self.rebuild_concurrency > MAX_REBUILD_CONCURRENCY
        {
            return Err(ConfigError::hierarchy(format!(
                "hierarchy.rebuild_concurrency must be {}-{}, got {}",
                MIN_REBUILD_CONCURRENCY, MAX_REBUILD_CONCURRENCY, self.rebuild_concurrency
            )));
        }

        Ok(())
    }
}
