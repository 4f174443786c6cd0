//! Data acquisition from the spreadsheet exports.
//!
//! [`CsvLoader`] reads one sheet into normalized [`SourceRow`](crate::generators::SourceRow)s.

mod csv_files;

pub use csv_files::CsvLoader;
