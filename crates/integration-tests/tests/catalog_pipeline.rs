//! Integration tests for the catalog filter/sort/paginate pipeline.
//!
//! These run against the library surface directly; no server or network
//! is involved.

#![allow(clippy::unwrap_used)]

use organi_live_core::Product;
use organi_live_integration_tests::product;
use organi_live_storefront::catalog::query::{
    CatalogQuery, PAGE_SIZE, SortKey, filter_sort_paginate,
};

/// A small catalog shaped like the real sheet: mixed categories, one
/// sold-out product, accented names.
fn sample_catalog() -> Vec<Product> {
    vec![
        product(1, "Banano Criollo", "Frutas", 3500, 20),
        product(2, "aguacate Hass", "Frutas", 8000, 12),
        product(3, "Tomate Chonto", "Verduras", 4200, 0),
        product(4, "Cilantro", "Hierbas", 1500, 30),
        product(5, "Limón Tahití", "Frutas", 5000, 8),
        product(6, "Zanahoria", "Verduras", 2800, 15),
    ]
}

// ============================================================================
// Filter + Sort + Paginate Combinations
// ============================================================================

#[test]
fn test_search_and_category_combine() {
    let catalog = sample_catalog();
    let page = filter_sort_paginate(
        &catalog,
        &CatalogQuery {
            search: Some("a".to_owned()),
            category: Some("Verduras".to_owned()),
            ..CatalogQuery::default()
        },
    );

    // both Verduras match the "a" search; Frutas are filtered out
    assert_eq!(page.total_matches, 2);
    assert!(page.items.iter().all(|p| p.category.as_deref() == Some("Verduras")));
}

#[test]
fn test_default_sort_ignores_case() {
    let catalog = sample_catalog();
    let page = filter_sort_paginate(&catalog, &CatalogQuery::default());
    let names: Vec<&str> = page.items.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "aguacate Hass",
            "Banano Criollo",
            "Cilantro",
            "Limón Tahití",
            "Tomate Chonto",
            "Zanahoria",
        ]
    );
}

#[test]
fn test_price_sort_within_category() {
    let catalog = sample_catalog();
    let page = filter_sort_paginate(
        &catalog,
        &CatalogQuery {
            category: Some("Frutas".to_owned()),
            sort: SortKey::PriceDesc,
            ..CatalogQuery::default()
        },
    );
    let names: Vec<&str> = page.items.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["aguacate Hass", "Limón Tahití", "Banano Criollo"]);
}

#[test]
fn test_repeated_query_is_deterministic() {
    let catalog = sample_catalog();
    let query = CatalogQuery {
        sort: SortKey::Stock,
        ..CatalogQuery::default()
    };

    let first = filter_sort_paginate(&catalog, &query);
    let second = filter_sort_paginate(&catalog, &query);
    assert_eq!(first.items, second.items);
    assert_eq!(first.page_count, second.page_count);
}

#[test]
fn test_pagination_over_large_catalog() {
    let catalog: Vec<Product> = (1..=37)
        .map(|i| product(i, &format!("Producto {i:02}"), "Frutas", 1000, 5))
        .collect();

    let page = filter_sort_paginate(
        &catalog,
        &CatalogQuery {
            page: 4,
            ..CatalogQuery::default()
        },
    );
    assert_eq!(page.page_count, 4);
    assert_eq!(page.items.len(), 37 - 3 * PAGE_SIZE);
    assert_eq!(page.label(), "Página 4 de 4");

    // a stale page number from a previous filter clamps into range
    let clamped = filter_sort_paginate(
        &catalog,
        &CatalogQuery {
            page: 12,
            ..CatalogQuery::default()
        },
    );
    assert_eq!(clamped.page, 4);
    assert!(!clamped.items.is_empty());
}

#[test]
fn test_empty_catalog_serves_one_empty_page() {
    let page = filter_sort_paginate(&[], &CatalogQuery::default());
    assert!(page.items.is_empty());
    assert_eq!(page.page, 1);
    assert_eq!(page.page_count, 1);
    assert_eq!(page.label(), "Página 1 de 1");
}
