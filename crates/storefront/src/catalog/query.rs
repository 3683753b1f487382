//! Filter/sort/paginate pipeline.
//!
//! A pure, synchronous transformation of the product list. The UI resets to
//! page 1 whenever a filter changes; here the requested page is simply
//! clamped into range so a stale page number can never produce an empty
//! view of a non-empty result.

use serde::{Deserialize, Serialize};

use organi_live_core::Product;

/// Number of products per page.
pub const PAGE_SIZE: usize = 10;

/// Sort order for the product grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Case-insensitive name, ascending.
    #[default]
    Name,
    /// Price, cheapest first.
    PriceAsc,
    /// Price, most expensive first.
    PriceDesc,
    /// Stock, fullest first.
    Stock,
}

impl SortKey {
    /// Query-parameter spelling of this key.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::PriceAsc => "price-asc",
            Self::PriceDesc => "price-desc",
            Self::Stock => "stock",
        }
    }
}

impl std::str::FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Self::Name),
            "price-asc" => Ok(Self::PriceAsc),
            "price-desc" => Ok(Self::PriceDesc),
            "stock" => Ok(Self::Stock),
            other => Err(format!("unknown sort key '{other}'")),
        }
    }
}

/// Catalog view parameters.
#[derive(Debug, Clone, Default)]
pub struct CatalogQuery {
    /// Case-insensitive substring matched against name, description, and
    /// category. `None` or empty disables the filter.
    pub search: Option<String>,
    /// Exact category. `None` or `"all"` disables the filter.
    pub category: Option<String>,
    /// Sort order.
    pub sort: SortKey,
    /// Requested page, 1-based. Clamped to the available range.
    pub page: usize,
}

/// One page of the filtered, sorted catalog.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogPage {
    /// Products on this page.
    pub items: Vec<Product>,
    /// The page actually served, 1-based.
    pub page: usize,
    /// Total pages for the current filters. At least 1.
    pub page_count: usize,
    /// Products matching the filters, across all pages.
    pub total_matches: usize,
}

impl CatalogPage {
    /// Pagination label, e.g. "Página 2 de 5".
    #[must_use]
    pub fn label(&self) -> String {
        format!("Página {} de {}", self.page, self.page_count)
    }
}

/// Apply filters, sort, and pagination to the product list.
///
/// The sort is stable: products that compare equal keep their catalog
/// order, so repeated calls with the same inputs yield the same page.
#[must_use]
pub fn filter_sort_paginate(products: &[Product], query: &CatalogQuery) -> CatalogPage {
    let mut matches: Vec<&Product> = products
        .iter()
        .filter(|p| matches_search(p, query.search.as_deref()))
        .filter(|p| matches_category(p, query.category.as_deref()))
        .collect();

    match query.sort {
        SortKey::Name => {
            matches.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
        }
        SortKey::PriceAsc => matches.sort_by(|a, b| a.price.amount.cmp(&b.price.amount)),
        SortKey::PriceDesc => matches.sort_by(|a, b| b.price.amount.cmp(&a.price.amount)),
        SortKey::Stock => matches.sort_by(|a, b| b.stock.cmp(&a.stock)),
    }

    let total_matches = matches.len();
    let page_count = total_matches.div_ceil(PAGE_SIZE).max(1);
    let page = query.page.clamp(1, page_count);

    let items = matches
        .into_iter()
        .skip((page - 1) * PAGE_SIZE)
        .take(PAGE_SIZE)
        .cloned()
        .collect();

    CatalogPage {
        items,
        page,
        page_count,
        total_matches,
    }
}

fn matches_search(product: &Product, search: Option<&str>) -> bool {
    let Some(term) = search.map(str::trim).filter(|t| !t.is_empty()) else {
        return true;
    };
    let term = term.to_lowercase();

    product.name.to_lowercase().contains(&term)
        || product.description.to_lowercase().contains(&term)
        || product
            .category
            .as_ref()
            .is_some_and(|c| c.to_lowercase().contains(&term))
}

fn matches_category(product: &Product, category: Option<&str>) -> bool {
    match category {
        None | Some("all") => true,
        Some(wanted) => product.category.as_deref() == Some(wanted),
    }
}
