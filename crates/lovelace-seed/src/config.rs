//! Configuration types for seed generation.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::catalog::{INGREDIENTS, MATERIALS};

/// Directory holding the spreadsheet exports when `SEED_DATA_DIR` is unset.
pub const DEFAULT_DATA_DIR: &str = "data";

/// Script path when `SEED_OUTPUT` is unset.
pub const DEFAULT_OUTPUT: &str = "002_seed.sql";

/// Input and output locations for one generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedConfig {
    /// CSV export of the ingredients sheet.
    pub ingredients_csv: PathBuf,

    /// CSV export of the materials sheet.
    pub materials_csv: PathBuf,

    /// Where the rendered SQL script is written.
    pub output: PathBuf,
}

impl SeedConfig {
    /// Builds a config reading both sheets from `data_dir`.
    pub fn with_data_dir(data_dir: impl AsRef<Path>, output: impl Into<PathBuf>) -> Self {
        let data_dir = data_dir.as_ref();
        Self {
            ingredients_csv: data_dir.join(INGREDIENTS.file_name),
            materials_csv: data_dir.join(MATERIALS.file_name),
            output: output.into(),
        }
    }

    /// Reads `SEED_DATA_DIR` and `SEED_OUTPUT`, falling back to the defaults.
    pub fn from_env() -> Self {
        let data_dir =
            std::env::var("SEED_DATA_DIR").unwrap_or_else(|_| DEFAULT_DATA_DIR.to_string());
        let output = std::env::var("SEED_OUTPUT").unwrap_or_else(|_| DEFAULT_OUTPUT.to_string());

        Self::with_data_dir(data_dir, output)
    }
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self::with_data_dir(DEFAULT_DATA_DIR, DEFAULT_OUTPUT)
    }
}
