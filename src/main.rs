use anyhow::{Context, Result};
use chrono::Local;
use kommunepop::{
    config::Settings,
    fetch::fetch_dataset,
    process::Criterion,
    render::Wikitext,
};
use reqwest::blocking::Client;
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

/// Municipalities printed on every run: Oslo, Stavanger, Trondheim.
const SAMPLES: &[(&str, Criterion)] = &[
    ("0301", Criterion::EveryFiveYears),
    ("1103", Criterion::EveryTenYears),
    ("5001", Criterion::EveryYear),
];

fn main() -> Result<()> {
    // ─── 1) init logging (stderr, stdout is wikitext only) ────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(std::io::stderr)
        .init();
    info!("startup");

    // ─── 2) fetch once ───────────────────────────────────────────────
    let settings = Settings::default();
    let client = Client::new();
    let dataset = fetch_dataset(&client, &settings.dataset_url)
        .with_context(|| format!("fetching {}", settings.dataset_url))?;

    // ─── 3) render each sample ───────────────────────────────────────
    let wikitext = Wikitext::from_settings(&settings, Local::now().date_naive());
    for &(code, criterion) in SAMPLES {
        let table = wikitext.table(&dataset, code, criterion);
        if table.is_empty() {
            warn!(code, %criterion, "no rows matched");
            continue;
        }
        info!(code, %criterion, "rendering");
        println!("{}", table);
        println!("{}", wikitext.chart(&dataset, code, criterion));
    }

    info!("all done");
    Ok(())
}
