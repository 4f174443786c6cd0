//! SQL output for seeding the database.
//!
//! [`render_script`] turns the loaded sheets into an idempotent seed script
//! and [`write_script`] stores it on disk.

mod escape;
mod script;
mod writer;

pub use escape::{escape_sql, quote};
pub use script::{SeedScript, render_script};
pub use writer::{WriteReport, write_script};
