//! Integration tests for the Organi.Live storefront.
//!
//! # Test Categories
//!
//! - `catalog_pipeline` - filter/sort/paginate over the product list
//! - `cart_flow` - cart mutations and the WhatsApp order handoff
//! - `auth_flow` - registration, login, and profile updates
//! - `api_smoke` - HTTP smoke tests against a running server (ignored
//!   by default; they need `SHEET_PRODUCTS_URL` and a live process)
//!
//! The first three categories run against the library surface directly
//! and need no network or running server. Run the smoke tests with:
//!
//! ```bash
//! cargo run -p organi-live-storefront &
//! cargo test -p organi-live-integration-tests -- --ignored
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use organi_live_core::{Price, Product, ProductId};

/// Build a product for test fixtures.
#[must_use]
pub fn product(id: i64, name: &str, category: &str, price_cop: i64, stock: u32) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_string(),
        description: format!("{name} de prueba"),
        category: Some(category.to_string()),
        price: Price::cop(price_cop),
        stock,
        image: None,
    }
}
