//! Build-time entry point: fetches (or falls back to) the course catalog and
//! writes the static `experiences.js` data module. Exits non-zero on any
//! failure so a broken artifact never ships.

use anyhow::{Context, Result};
use cursos_data::config::CursosConfig;
use cursos_data::{csv_import, fallback, generator};
use std::path::Path;
use std::time::Duration;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let config = match CursosConfig::load() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Failed to load configuration: {err:#}");
            std::process::exit(1);
        }
    };

    init_tracing(&config.logging.level);

    if let Err(err) = run(&config).await {
        error!("Failed to generate course data module: {err:#}");
        std::process::exit(1);
    }
}

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

async fn run(config: &CursosConfig) -> Result<()> {
    info!("Generating course data module (source: {})", config.generator.source);

    let catalog = match config.generator.source.as_str() {
        "csv" => {
            let timeout = Duration::from_secs(u64::from(config.catalog.timeout_seconds));
            csv_import::fetch_csv(&config.generator.csv_url, timeout)
                .await
                .context("Failed to fetch the spreadsheet CSV export")?
        }
        _ => fallback::fallback_catalog(),
    };

    let output_path = Path::new(&config.generator.output_path);
    let summary = generator::write_module(&catalog, output_path)
        .with_context(|| format!("Failed to write {}", output_path.display()))?;

    info!(
        "Done: {} locations, {} courses, {} enrolled",
        summary.locations, summary.courses, summary.enrolled
    );
    Ok(())
}
