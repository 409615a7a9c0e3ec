use crate::fetch::RawDataset;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

pub(crate) fn init_test_logging() {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,kommunepop=debug")),
        )
        .with_test_writer()
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

/// Header, then 1986..=2023 for Oslo, Stavanger, the Oslo county and the
/// whole country, in the order SSB publishes them.
///
/// Oslo: 449395 + 5000 per year. Stavanger: 95000 + 1000 per year, crossing
/// 100000 in 1991.
pub(crate) fn synthetic_dataset() -> RawDataset {
    let mut text = String::from(
        "\"region\",\"year\",\"contents\",\"26975: Population, by region, year and contents\"\n",
    );
    let regions: [(&str, u32, u32); 4] = [
        ("K-0301 Oslo - Oslove", 449_395, 5_000),
        ("K-1103 Stavanger", 95_000, 1_000),
        ("F-03 Oslo", 449_395, 5_000),
        ("0 The whole country", 4_159_187, 20_000),
    ];
    for (label, base, step) in regions {
        for year in 1986u32..=2023 {
            text.push_str(&format!(
                "\"{}\",\"{}\",\"Persons\",{}\n",
                label,
                year,
                base + (year - 1986) * step
            ));
        }
    }
    RawDataset::from_text(text)
}
