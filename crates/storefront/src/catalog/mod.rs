//! Catalog service.
//!
//! Holds the last successfully loaded product list in memory. A load
//! replaces the list wholesale; a failed load keeps the previous list (or
//! an empty one) and records a displayable error for the UI. There is no
//! automatic retry: the user triggers a reload.

pub mod query;

use std::sync::{Arc, RwLock};

use serde::Serialize;

use organi_live_core::{Product, ProductId};

use crate::sheets::{SheetsClient, SheetsError};

/// Catalog stock statistics for the storefront header cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CatalogStats {
    /// All products in the catalog.
    pub total: usize,
    /// Products comfortably in stock.
    pub available: usize,
    /// Products in stock but at or below the low-stock threshold.
    pub low_stock: usize,
    /// Products with no stock.
    pub out_of_stock: usize,
}

#[derive(Debug)]
struct CatalogInner {
    products: Arc<Vec<Product>>,
    last_error: Option<String>,
}

/// In-memory catalog backed by the product sheet.
pub struct CatalogService {
    sheets: SheetsClient,
    inner: RwLock<CatalogInner>,
}

impl CatalogService {
    /// Create an empty catalog.
    #[must_use]
    pub fn new(sheets: SheetsClient) -> Self {
        Self {
            sheets,
            inner: RwLock::new(CatalogInner {
                products: Arc::new(Vec::new()),
                last_error: None,
            }),
        }
    }

    /// Load products, serving the sheet cache when fresh.
    ///
    /// # Errors
    ///
    /// Returns the fetch error; the previously loaded list is retained.
    pub async fn load(&self) -> Result<Arc<Vec<Product>>, SheetsError> {
        let result = self.sheets.fetch_products().await;
        self.apply(result)
    }

    /// Reload products straight from the sheet, bypassing the cache.
    ///
    /// # Errors
    ///
    /// Returns the fetch error; the previously loaded list is retained.
    pub async fn reload(&self) -> Result<Arc<Vec<Product>>, SheetsError> {
        let result = self.sheets.fetch_products_uncached().await;
        self.apply(result)
    }

    fn apply(
        &self,
        result: Result<Arc<Vec<Product>>, SheetsError>,
    ) -> Result<Arc<Vec<Product>>, SheetsError> {
        let mut inner = self.lock_write();
        match result {
            Ok(products) => {
                inner.products = Arc::clone(&products);
                inner.last_error = None;
                Ok(products)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Catalog load failed, keeping previous list");
                inner.last_error = Some("Error al cargar productos".to_string());
                Err(e)
            }
        }
    }

    /// The last successfully loaded product list.
    #[must_use]
    pub fn products(&self) -> Arc<Vec<Product>> {
        Arc::clone(&self.lock_read().products)
    }

    /// Displayable error from the most recent load, if it failed.
    #[must_use]
    pub fn last_error(&self) -> Option<String> {
        self.lock_read().last_error.clone()
    }

    /// Look up a product by ID.
    #[must_use]
    pub fn find(&self, id: ProductId) -> Option<Product> {
        self.lock_read()
            .products
            .iter()
            .find(|p| p.id == id)
            .cloned()
    }

    /// Distinct categories in first-seen order, for the filter dropdown.
    #[must_use]
    pub fn categories(&self) -> Vec<String> {
        let inner = self.lock_read();
        let mut categories = Vec::new();
        for product in inner.products.iter() {
            if let Some(category) = &product.category
                && !categories.contains(category)
            {
                categories.push(category.clone());
            }
        }
        categories
    }

    /// Stock statistics over the whole catalog.
    #[must_use]
    pub fn stats(&self) -> CatalogStats {
        let inner = self.lock_read();
        let mut stats = CatalogStats {
            total: inner.products.len(),
            available: 0,
            low_stock: 0,
            out_of_stock: 0,
        };
        for product in inner.products.iter() {
            if product.is_out_of_stock() {
                stats.out_of_stock += 1;
            } else if product.is_low_stock() {
                stats.low_stock += 1;
            } else {
                stats.available += 1;
            }
        }
        stats
    }

    fn lock_read(&self) -> std::sync::RwLockReadGuard<'_, CatalogInner> {
        self.inner.read().unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    fn lock_write(&self) -> std::sync::RwLockWriteGuard<'_, CatalogInner> {
        self.inner.write().unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}
