//! gviz response parsing.
//!
//! The Google Sheets gviz endpoint answers with a JSONP-style wrapper:
//!
//! ```text
//! /*O_o*/
//! google.visualization.Query.setResponse({"version":"0.6","table":{...}});
//! ```
//!
//! We strip the wrapper, deserialize the table, and map rows to products by
//! column label. The sheet is maintained in Spanish, so labels are matched
//! against both Spanish and English aliases.

use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::Deserialize;

use organi_live_core::{CurrencyCode, Price, Product, ProductId};

use super::SheetsError;

#[derive(Debug, Deserialize)]
struct GvizResponse {
    table: GvizTable,
}

#[derive(Debug, Deserialize)]
struct GvizTable {
    #[serde(default)]
    cols: Vec<GvizCol>,
    #[serde(default)]
    rows: Vec<GvizRow>,
}

#[derive(Debug, Deserialize)]
struct GvizCol {
    #[serde(default)]
    label: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GvizRow {
    #[serde(default)]
    c: Vec<Option<GvizCell>>,
}

#[derive(Debug, Deserialize)]
struct GvizCell {
    /// Raw cell value (number, string, bool, ...).
    #[serde(default)]
    v: Option<serde_json::Value>,
    /// Formatted cell value as the sheet displays it.
    #[serde(default)]
    f: Option<String>,
}

/// Resolved column positions for the product table.
#[derive(Debug)]
struct Columns {
    id: Option<usize>,
    name: usize,
    description: Option<usize>,
    category: Option<usize>,
    price: usize,
    stock: usize,
    image: Option<usize>,
}

impl Columns {
    fn resolve(cols: &[GvizCol]) -> Result<Self, SheetsError> {
        let labels: Vec<String> = cols
            .iter()
            .map(|c| {
                c.label
                    .as_deref()
                    .unwrap_or_default()
                    .trim()
                    .to_lowercase()
            })
            .collect();

        let find = |aliases: &[&str]| {
            labels
                .iter()
                .position(|label| aliases.contains(&label.as_str()))
        };

        Ok(Self {
            id: find(&["id"]),
            name: find(&["nombre", "name", "producto"])
                .ok_or(SheetsError::MissingColumn("nombre"))?,
            description: find(&["descripcion", "descripción", "description"]),
            category: find(&["categoria", "categoría", "category"]),
            price: find(&["precio", "price"]).ok_or(SheetsError::MissingColumn("precio"))?,
            stock: find(&["stock", "cantidad"]).ok_or(SheetsError::MissingColumn("stock"))?,
            image: find(&["imagen", "image", "foto"]),
        })
    }
}

/// Parse a gviz product response body into products.
pub(super) fn parse_products(body: &str) -> Result<Vec<Product>, SheetsError> {
    let json = strip_wrapper(body)?;
    let response: GvizResponse = serde_json::from_str(json)
        .map_err(|e| SheetsError::Malformed(format!("invalid table JSON: {e}")))?;

    let columns = Columns::resolve(&response.table.cols)?;

    let mut products = Vec::with_capacity(response.table.rows.len());
    for (i, row) in response.table.rows.iter().enumerate() {
        let row_number = i + 1;

        // Sheets pad trailing rows with empty cells; a row without a name
        // is not a product.
        let Some(name) = cell_string(row, Some(columns.name)).filter(|n| !n.is_empty()) else {
            continue;
        };

        let price = parse_price(row, columns.price)
            .map_err(|reason| SheetsError::Row {
                row: row_number,
                reason,
            })?;
        if price < Decimal::ZERO {
            return Err(SheetsError::Row {
                row: row_number,
                reason: format!("negative price {price}"),
            });
        }

        let stock = parse_stock(row, columns.stock);

        let id = columns
            .id
            .and_then(|idx| cell_number(row, idx))
            .and_then(|n| n.trunc().to_i64())
            .unwrap_or(row_number as i64);

        products.push(Product {
            id: ProductId::new(id),
            name,
            description: cell_string(row, columns.description).unwrap_or_default(),
            category: cell_string(row, columns.category),
            price: Price::new(price, CurrencyCode::COP),
            stock,
            image: cell_string(row, columns.image),
        });
    }

    Ok(products)
}

/// Cut the `setResponse(...)` payload out of the JSONP wrapper.
fn strip_wrapper(body: &str) -> Result<&str, SheetsError> {
    let start = body
        .find('{')
        .ok_or_else(|| SheetsError::Malformed("no JSON object in response".to_string()))?;
    let end = body
        .rfind('}')
        .ok_or_else(|| SheetsError::Malformed("unterminated JSON object".to_string()))?;
    body.get(start..=end)
        .ok_or_else(|| SheetsError::Malformed("unterminated JSON object".to_string()))
}

/// Read a cell as trimmed text, falling back to the formatted value.
fn cell_string(row: &GvizRow, idx: Option<usize>) -> Option<String> {
    let cell = row.c.get(idx?)?.as_ref()?;
    let text = match &cell.v {
        Some(serde_json::Value::String(s)) => s.clone(),
        Some(serde_json::Value::Number(n)) => n.to_string(),
        _ => cell.f.clone()?,
    };
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}

/// Read a cell as a decimal number, if it is one.
fn cell_number(row: &GvizRow, idx: usize) -> Option<Decimal> {
    let cell = row.c.get(idx)?.as_ref()?;
    match &cell.v {
        Some(serde_json::Value::Number(n)) => Decimal::from_str(&n.to_string()).ok(),
        Some(serde_json::Value::String(s)) => Decimal::from_str(s.trim()).ok(),
        _ => None,
    }
}

/// Parse the price cell.
///
/// Numeric cells are taken verbatim. Text cells may carry es-CO formatting
/// (`$3.500` or `3.500,50`), which is normalized before parsing.
fn parse_price(row: &GvizRow, idx: usize) -> Result<Decimal, String> {
    if let Some(value) = cell_number(row, idx) {
        return Ok(value);
    }

    let raw = cell_string(row, Some(idx)).ok_or_else(|| "missing price".to_string())?;
    let cleaned: String = raw
        .chars()
        .filter(|c| !matches!(c, '$' | ' ' | '\u{a0}'))
        .collect();

    let normalized = if cleaned.contains(',') {
        // es-CO: dot groups thousands, comma separates decimals
        cleaned.replace('.', "").replace(',', ".")
    } else if is_grouped_thousands(&cleaned) {
        cleaned.replace('.', "")
    } else {
        cleaned
    };

    Decimal::from_str(&normalized).map_err(|_| format!("unparseable price '{raw}'"))
}

/// Whether a string looks like `1.234.567` (dot-grouped thousands).
fn is_grouped_thousands(s: &str) -> bool {
    let mut groups = s.split('.');
    let Some(first) = groups.next() else {
        return false;
    };
    if first.is_empty() || first.len() > 3 || !first.chars().all(|c| c.is_ascii_digit()) {
        return false;
    }
    let mut rest = 0;
    for group in groups {
        if group.len() != 3 || !group.chars().all(|c| c.is_ascii_digit()) {
            return false;
        }
        rest += 1;
    }
    rest > 0
}

/// Parse the stock cell. Missing, unparseable, or negative stock counts
/// as zero (the product shows as "agotado" rather than failing the load).
fn parse_stock(row: &GvizRow, idx: usize) -> u32 {
    cell_number(row, idx)
        .filter(|n| *n >= Decimal::ZERO)
        .and_then(|n| n.trunc().to_u32())
        .unwrap_or(0)
}
