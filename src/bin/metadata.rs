// Prints the population metadata block for the reference year.

use anyhow::{Context, Result};
use kommunepop::{config::Settings, fetch::fetch_dataset, render::render_metadata};
use reqwest::blocking::Client;
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(std::io::stderr)
        .init();

    let settings = Settings::default();
    let dataset = fetch_dataset(&Client::new(), &settings.dataset_url)
        .with_context(|| format!("fetching {}", settings.dataset_url))?;

    let block = render_metadata(&dataset, settings.reference_year);
    if block.is_empty() {
        warn!(year = settings.reference_year, "no municipalities found");
    } else {
        info!(
            year = settings.reference_year,
            entries = block.lines().count(),
            "metadata rendered"
        );
    }
    print!("{}", block);
    Ok(())
}
