//! Product catalog route handlers.

use axum::{Json, extract::Query, extract::State};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use organi_live_core::Product;

use crate::catalog::CatalogStats;
use crate::catalog::query::{CatalogPage, CatalogQuery, SortKey, filter_sort_paginate};
use crate::error::{AppError, Result};
use crate::state::AppState;

/// Product listing query parameters.
#[derive(Debug, Deserialize)]
pub struct ProductsQuery {
    pub search: Option<String>,
    pub category: Option<String>,
    pub sort: Option<String>,
    pub page: Option<usize>,
}

/// Product listing response: one page plus the grid chrome (stats,
/// category dropdown, pagination label).
#[derive(Debug, Serialize)]
pub struct ProductsResponse {
    pub items: Vec<Product>,
    pub page: usize,
    pub page_count: usize,
    pub page_label: String,
    pub total_matches: usize,
    pub stats: CatalogStats,
    pub categories: Vec<String>,
    /// Displayable error from the most recent failed load, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub load_error: Option<String>,
}

impl ProductsResponse {
    fn assemble(state: &AppState, page: CatalogPage) -> Self {
        Self {
            page_label: page.label(),
            items: page.items,
            page: page.page,
            page_count: page.page_count,
            total_matches: page.total_matches,
            stats: state.catalog().stats(),
            categories: state.catalog().categories(),
            load_error: state.catalog().last_error(),
        }
    }
}

impl TryFrom<ProductsQuery> for CatalogQuery {
    type Error = AppError;

    fn try_from(query: ProductsQuery) -> Result<Self> {
        let sort = query
            .sort
            .as_deref()
            .map(str::parse::<SortKey>)
            .transpose()
            .map_err(AppError::BadRequest)?
            .unwrap_or_default();

        Ok(Self {
            search: query.search,
            category: query.category,
            sort,
            page: query.page.unwrap_or(1),
        })
    }
}

/// List products with filters, sort, and pagination.
///
/// GET /products
#[instrument(skip(state))]
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ProductsQuery>,
) -> Result<Json<ProductsResponse>> {
    // Lazy first load: the catalog starts empty before the initial fetch.
    if state.catalog().products().is_empty() && state.catalog().last_error().is_none() {
        if let Err(e) = state.catalog().load().await {
            tracing::warn!(error = %e, "Initial catalog load failed");
        }
    }

    let catalog_query = CatalogQuery::try_from(query)?;
    let products = state.catalog().products();
    let page = filter_sort_paginate(&products, &catalog_query);

    Ok(Json(ProductsResponse::assemble(&state, page)))
}

/// Reload the catalog from the sheet, bypassing the cache.
///
/// POST /products/reload
#[instrument(skip(state))]
pub async fn reload(State(state): State<AppState>) -> Result<Json<ProductsResponse>> {
    state.catalog().reload().await?;

    let products = state.catalog().products();
    let page = filter_sort_paginate(&products, &CatalogQuery::default());
    Ok(Json(ProductsResponse::assemble(&state, page)))
}
