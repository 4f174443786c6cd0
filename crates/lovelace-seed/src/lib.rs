//! Seed script generation for Lovelace.
//!
//! Reads the ingredient and material spreadsheet exports and renders a SQL
//! script that seeds users, the default supplier, categories, products and
//! their initial inventory. Every statement skips rows that already exist,
//! so the script can be applied repeatedly.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use lovelace_seed::prelude::*;
//!
//! let result = SeedRun::new(SeedConfig::default()).generate()?;
//! println!("{} ({} lines)", result.report.path.display(), result.report.lines);
//! ```

pub mod builders;
pub mod catalog;
pub mod config;
pub mod db;
pub mod errors;
pub mod generators;
pub mod sources;

pub use errors::SeedError;

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::builders::{SeedMetrics, SeedResult, SeedRun};
    pub use crate::catalog::{INGREDIENTS, MATERIALS, ProductTable, ProductType};
    pub use crate::config::SeedConfig;
    pub use crate::db::{WriteReport, escape_sql, render_script, write_script};
    pub use crate::errors::SeedError;
    pub use crate::generators::{ProductGenerator, SourceRow, parse_price};
    pub use crate::sources::CsvLoader;
}
