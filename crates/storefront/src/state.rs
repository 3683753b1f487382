//! Application state shared across handlers.

use std::sync::{Arc, PoisonError, RwLock};

use crate::cart::Cart;
use crate::catalog::CatalogService;
use crate::config::StorefrontConfig;
use crate::sheets::SheetsClient;
use crate::users::UserRegistry;

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`. The cart and user registry are the only
/// mutable pieces; each has a single logical owner (this process), so a
/// plain `RwLock` bridging axum's worker threads is all the coordination
/// they need.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    sheets: SheetsClient,
    catalog: CatalogService,
    cart: RwLock<Cart>,
    users: RwLock<UserRegistry>,
}

impl AppState {
    /// Create a new application state from configuration.
    #[must_use]
    pub fn new(config: StorefrontConfig) -> Self {
        let sheets = SheetsClient::new(&config.sheets);
        let catalog = CatalogService::new(sheets.clone());

        Self {
            inner: Arc::new(AppStateInner {
                config,
                sheets,
                catalog,
                cart: RwLock::new(Cart::new()),
                users: RwLock::new(UserRegistry::new()),
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the sheets client.
    #[must_use]
    pub fn sheets(&self) -> &SheetsClient {
        &self.inner.sheets
    }

    /// Get a reference to the catalog service.
    #[must_use]
    pub fn catalog(&self) -> &CatalogService {
        &self.inner.catalog
    }

    /// Run a closure against the cart (read-only).
    pub fn with_cart<T>(&self, f: impl FnOnce(&Cart) -> T) -> T {
        let cart = self
            .inner
            .cart
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        f(&cart)
    }

    /// Run a closure against the cart (mutable).
    pub fn with_cart_mut<T>(&self, f: impl FnOnce(&mut Cart) -> T) -> T {
        let mut cart = self
            .inner
            .cart
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        f(&mut cart)
    }

    /// Run a closure against the user registry (read-only).
    pub fn with_users<T>(&self, f: impl FnOnce(&UserRegistry) -> T) -> T {
        let users = self
            .inner
            .users
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        f(&users)
    }

    /// Run a closure against the user registry (mutable).
    pub fn with_users_mut<T>(&self, f: impl FnOnce(&mut UserRegistry) -> T) -> T {
        let mut users = self
            .inner
            .users
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        f(&mut users)
    }
}
