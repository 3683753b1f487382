//! Cache types for sheet responses.

use std::sync::Arc;

use organi_live_core::Product;

/// Cache key for sheet fetches.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub enum CacheKey {
    Products,
}

/// Cached value types.
#[derive(Debug, Clone)]
pub enum CacheValue {
    Products(Arc<Vec<Product>>),
}
