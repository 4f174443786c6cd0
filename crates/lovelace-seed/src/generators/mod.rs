//! Row normalization and product generation.
//!
//! - [`SourceRow`]: one spreadsheet row with defaults applied
//! - [`parse_price`]: decimal-comma to SQL numeric literal
//! - [`ProductGenerator`]: sequential product codes per sheet

pub mod product;

pub use product::{
    DEFAULT_PRICE, GeneratedProduct, ProductGenerator, SourceRow, parse_price, product_code,
};
