//! Seed script generator
//!
//! Run with:
//! ```
//! cargo run -p lovelace-seed --bin seed
//! ```

use lovelace_seed::builders::SeedRun;
use lovelace_seed::config::SeedConfig;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = SeedConfig::from_env();
    tracing::info!(
        "Reading {} and {}",
        config.ingredients_csv.display(),
        config.materials_csv.display()
    );

    let result = SeedRun::new(config).generate()?;

    if result.metrics.price_fallbacks > 0 {
        tracing::debug!(
            "{} prices could not be parsed and were written as 0.00",
            result.metrics.price_fallbacks
        );
    }
    tracing::info!("Seed generated in {} ms", result.metrics.elapsed_ms);

    println!("Seed generado en: {}", result.report.path.display());
    println!("Líneas escritas: {}", result.report.lines);

    Ok(())
}
