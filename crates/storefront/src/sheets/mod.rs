//! Google Sheets client.
//!
//! The catalog lives in a public spreadsheet exposed through the gviz
//! endpoint, and contact messages are appended through an Apps Script web
//! app. This module owns both round trips; everything above it works with
//! plain [`Product`] values.
//!
//! Product fetches are cached with a short TTL so repeated page loads do
//! not hammer the sheet. A manual catalog reload bypasses the cache.

mod cache;
mod gviz;

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;
use thiserror::Error;

use organi_live_core::Product;

use crate::config::SheetsConfig;
use crate::models::contact::ContactMessage;
use cache::{CacheKey, CacheValue};

/// How long a fetched product list stays fresh.
const PRODUCTS_TTL: Duration = Duration::from_secs(60);

/// Errors from the sheet endpoints.
#[derive(Debug, Error)]
pub enum SheetsError {
    /// The HTTP request itself failed.
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The endpoint answered with a non-success status.
    #[error("unexpected status {0}")]
    Status(u16),

    /// The gviz response could not be parsed.
    #[error("malformed sheet response: {0}")]
    Malformed(String),

    /// A required column is absent from the sheet.
    #[error("sheet is missing column '{0}'")]
    MissingColumn(&'static str),

    /// A row could not be mapped to a product.
    #[error("row {row}: {reason}")]
    Row { row: usize, reason: String },

    /// `SHEET_CONTACT_URL` is not set.
    #[error("contact endpoint is not configured")]
    ContactNotConfigured,

    /// The Apps Script endpoint did not report success.
    #[error("contact endpoint rejected the message: {0}")]
    ContactRejected(String),
}

/// Client for the storefront's spreadsheet endpoints.
#[derive(Clone)]
pub struct SheetsClient {
    http: reqwest::Client,
    config: SheetsConfig,
    cache: Cache<CacheKey, CacheValue>,
}

impl SheetsClient {
    /// Create a new client.
    #[must_use]
    pub fn new(config: &SheetsConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config: config.clone(),
            cache: Cache::builder()
                .max_capacity(8)
                .time_to_live(PRODUCTS_TTL)
                .build(),
        }
    }

    /// Fetch the product list, serving a cached copy when fresh.
    ///
    /// # Errors
    ///
    /// Returns `SheetsError` if the request or parsing fails.
    pub async fn fetch_products(&self) -> Result<Arc<Vec<Product>>, SheetsError> {
        if let Some(CacheValue::Products(products)) = self.cache.get(&CacheKey::Products).await {
            tracing::debug!(count = products.len(), "Product cache hit");
            return Ok(products);
        }

        let products = self.fetch_products_uncached().await?;
        self.cache
            .insert(CacheKey::Products, CacheValue::Products(Arc::clone(&products)))
            .await;
        Ok(products)
    }

    /// Fetch the product list straight from the sheet, refreshing the cache.
    ///
    /// # Errors
    ///
    /// Returns `SheetsError` if the request or parsing fails.
    pub async fn fetch_products_uncached(&self) -> Result<Arc<Vec<Product>>, SheetsError> {
        let response = self
            .http
            .get(self.config.products_url.clone())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SheetsError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        let products = Arc::new(gviz::parse_products(&body)?);
        tracing::info!(count = products.len(), "Fetched products from sheet");

        self.cache
            .insert(CacheKey::Products, CacheValue::Products(Arc::clone(&products)))
            .await;
        Ok(products)
    }

    /// Append a contact message to the spreadsheet via Apps Script.
    ///
    /// The message must already be validated; this only performs the
    /// round trip.
    ///
    /// # Errors
    ///
    /// Returns `SheetsError::ContactNotConfigured` if no endpoint is set,
    /// or the transport/rejection errors otherwise.
    pub async fn send_contact(&self, message: &ContactMessage) -> Result<(), SheetsError> {
        let url = self
            .config
            .contact_url
            .as_ref()
            .ok_or(SheetsError::ContactNotConfigured)?;

        let payload = serde_json::json!({
            "name": message.name.trim(),
            "email": message.email.trim(),
            "phone": message.phone.as_deref().unwrap_or("").trim(),
            "message": message.message.trim(),
        });

        let response = self.http.post(url.clone()).json(&payload).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SheetsError::Status(status.as_u16()));
        }

        // Apps Script web apps answer {"result": "success"} on append
        let body: serde_json::Value = response.json().await?;
        match body.get("result").and_then(serde_json::Value::as_str) {
            Some("success") => Ok(()),
            other => Err(SheetsError::ContactRejected(
                other.unwrap_or("no result field").to_string(),
            )),
        }
    }
}
