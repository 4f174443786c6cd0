//! End-to-end seed generation: load both sheets, render, write.

use std::time::Instant;

use tracing::info;

use crate::catalog::{INGREDIENTS, MATERIALS};
use crate::config::SeedConfig;
use crate::db::{WriteReport, render_script, write_script};
use crate::errors::SeedError;
use crate::generators::SourceRow;
use crate::sources::CsvLoader;

/// Result of one generation run.
#[derive(Debug)]
pub struct SeedResult {
    pub ingredients: Vec<SourceRow>,
    pub materials: Vec<SourceRow>,
    pub sql: String,
    pub report: WriteReport,
    pub metrics: SeedMetrics,
}

/// Counters collected during a run.
#[derive(Debug, Clone)]
pub struct SeedMetrics {
    pub ingredient_count: usize,
    pub material_count: usize,
    /// Rows whose price text was not a number and was written as `0.00`.
    pub price_fallbacks: usize,
    pub elapsed_ms: u64,
}

/// One generation run over a [`SeedConfig`].
///
/// # Example
///
/// ```rust,ignore
/// let result = SeedRun::new(SeedConfig::from_env()).generate()?;
/// println!("{}", result.report.path.display());
/// ```
pub struct SeedRun {
    config: SeedConfig,
}

impl SeedRun {
    pub fn new(config: SeedConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SeedConfig {
        &self.config
    }

    /// Loads both sheets and renders the script without touching the output file.
    pub fn render(&self) -> Result<(Vec<SourceRow>, Vec<SourceRow>, String), SeedError> {
        let ingredients = CsvLoader::load_file(&self.config.ingredients_csv, &INGREDIENTS.columns)?;
        info!("Ingredientes: {} filas", ingredients.len());

        let materials = CsvLoader::load_file(&self.config.materials_csv, &MATERIALS.columns)?;
        info!("Materiales:   {} filas", materials.len());

        let sql = render_script(&ingredients, &materials);
        Ok((ingredients, materials, sql))
    }

    /// Runs the whole pipeline. Both sheets are read before anything is
    /// written, so a missing input leaves the previous output in place.
    pub fn generate(&self) -> Result<SeedResult, SeedError> {
        let start = Instant::now();

        let (ingredients, materials, sql) = self.render()?;
        let report = write_script(&self.config.output, &sql)?;

        let price_fallbacks = ingredients
            .iter()
            .chain(&materials)
            .filter(|r| r.price_defaulted)
            .count();

        let metrics = SeedMetrics {
            ingredient_count: ingredients.len(),
            material_count: materials.len(),
            price_fallbacks,
            elapsed_ms: start.elapsed().as_millis() as u64,
        };

        Ok(SeedResult {
            ingredients,
            materials,
            sql,
            report,
            metrics,
        })
    }
}
