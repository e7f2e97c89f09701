use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use redfin_scraper::adapters::http::HttpBrowser;
use redfin_scraper::adapters::output::write_results;
use redfin_scraper::adapters::reporter::TracingReporter;
use redfin_scraper::config::load_config;
use redfin_scraper::pipeline::run::RedfinScraper;

fn find_config_path() -> PathBuf {
    let candidates = [PathBuf::from("config.yaml"), binary_dir().join("config.yaml")];

    for path in &candidates {
        if path.exists() {
            return path.clone();
        }
    }

    candidates[0].clone()
}

fn binary_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr; stdout carries the JSON results
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let config_path = find_config_path();
    let config = load_config(&config_path)?;
    let limit = config.scraper.limit;

    tracing::info!(limit, list_url = %config.scraper.list_url, "Starting redfin-scraper");

    let browser = HttpBrowser::new(&config.scraper).context("failed to build HTTP client")?;
    let scraper = RedfinScraper::new(Box::new(browser), config.scraper, Arc::new(TracingReporter))?;

    let homes = scraper.scrape(limit).await?;

    let output_path = Path::new(&config.output.path);
    let json = write_results(output_path, &homes, config.output.pretty)
        .await
        .with_context(|| format!("failed to write {}", output_path.display()))?;
    if config.output.echo_stdout {
        println!("{json}");
    }
    tracing::info!("Saved {} records to {}", homes.len(), output_path.display());

    Ok(())
}
