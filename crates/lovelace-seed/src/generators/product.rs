//! Source rows and the products generated from them.

use crate::catalog::{Category, DEFAULT_UNIT, ProductTable, ProductType};

/// Price written when a cell is blank or not a number.
pub const DEFAULT_PRICE: &str = "0.00";

/// One retained spreadsheet row, normalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceRow {
    pub name: String,
    pub unit: String,
    /// SQL numeric literal, `.` as radix point.
    pub price: String,
    /// The price cell held text that is not a number and was replaced by [`DEFAULT_PRICE`].
    pub price_defaulted: bool,
}

impl SourceRow {
    /// Normalizes raw cell values. Returns `None` when the name is blank.
    pub fn from_fields(name: &str, unit: &str, price: &str) -> Option<Self> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }

        let unit = match unit.trim() {
            "" => DEFAULT_UNIT,
            unit => unit,
        };

        let cleaned = clean_price(price);
        let price_defaulted = !cleaned.is_empty() && !is_price_literal(&cleaned);

        Some(Self {
            name: name.to_string(),
            unit: unit.to_string(),
            price: parse_price(price),
            price_defaulted,
        })
    }
}

/// Converts a spreadsheet price (`"1,08"`) into a SQL numeric literal (`"1.08"`).
///
/// The cleaned text is returned as-is when it parses, so digits and precision
/// survive untouched. Blank or unparseable input yields [`DEFAULT_PRICE`].
pub fn parse_price(raw: &str) -> String {
    let cleaned = clean_price(raw);
    if is_price_literal(&cleaned) {
        cleaned
    } else {
        DEFAULT_PRICE.to_string()
    }
}

fn clean_price(raw: &str) -> String {
    raw.trim()
        .trim_matches('"')
        .replace(',', ".")
        .trim()
        .to_string()
}

// inf and NaN parse as f64 but are not SQL numerics
fn is_price_literal(s: &str) -> bool {
    s.parse::<f64>().is_ok_and(f64::is_finite)
}

/// Code for the row at 1-based `position` of `table`, e.g. `ING-0001`.
pub fn product_code(table: &ProductTable, position: usize) -> String {
    format!("{}-{position:04}", table.code_prefix)
}

/// Product data ready for rendering into `public.products`.
#[derive(Debug, Clone)]
pub struct GeneratedProduct {
    pub code: String,
    pub name: String,
    pub product_type: ProductType,
    pub unit: String,
    pub unit_price: String,
    pub category: Category,
}

/// Turns the rows of one sheet into products with sequential codes.
pub struct ProductGenerator {
    table: ProductTable,
}

impl ProductGenerator {
    pub fn new(table: ProductTable) -> Self {
        Self { table }
    }

    /// Generates one product per row, numbered from 1 in row order.
    pub fn generate_batch(&self, rows: &[SourceRow]) -> Vec<GeneratedProduct> {
        rows.iter()
            .enumerate()
            .map(|(i, row)| GeneratedProduct {
                code: product_code(&self.table, i + 1),
                name: row.name.clone(),
                product_type: self.table.product_type,
                unit: row.unit.clone(),
                unit_price: row.price.clone(),
                category: self.table.category,
            })
            .collect()
    }
}
