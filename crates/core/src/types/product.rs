//! Catalog product record.

use serde::{Deserialize, Serialize};

use crate::types::id::ProductId;
use crate::types::price::Price;

/// Stock level at or below which a product counts as "low stock" in the
/// catalog statistics and the product grid badge.
pub const LOW_STOCK_THRESHOLD: u32 = 5;

/// A product loaded from the catalog sheet.
///
/// Products are immutable once loaded; a reload replaces the whole list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique product ID (the sheet row key).
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Short description shown on the product card.
    pub description: String,
    /// Optional category (e.g., "Frutas", "Verduras").
    pub category: Option<String>,
    /// Unit price. Non-negative.
    pub price: Price,
    /// Units available. Caps cart line quantities.
    pub stock: u32,
    /// Product image URL, if the sheet provides one.
    pub image: Option<String>,
}

impl Product {
    /// Whether the product cannot be added to the cart.
    #[must_use]
    pub const fn is_out_of_stock(&self) -> bool {
        self.stock == 0
    }

    /// Whether the product is in stock but running low.
    #[must_use]
    pub const fn is_low_stock(&self) -> bool {
        self.stock > 0 && self.stock <= LOW_STOCK_THRESHOLD
    }
}
