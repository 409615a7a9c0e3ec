// src/render/mod.rs
use crate::config::{Citation, Labels, Settings};
use crate::fetch::RawDataset;
use crate::process::{self, Criterion};
use chrono::NaiveDate;

pub mod chart;
pub mod format;
pub mod metadata;
pub mod table;

pub use format::format_population;

/// Renders wikitext from an already fetched dataset. Every method returns an
/// empty string when nothing in the dataset matches.
#[derive(Debug, Clone)]
pub struct Wikitext {
    labels: Labels,
    citation: Citation,
}

impl Wikitext {
    pub fn new(labels: Labels, citation: Citation) -> Self {
        Self { labels, citation }
    }

    pub fn from_settings(settings: &Settings, accessed: NaiveDate) -> Self {
        Self::new(settings.labels.clone(), settings.citation(accessed))
    }

    pub fn table(&self, dataset: &RawDataset, code: &str, criterion: Criterion) -> String {
        let records = process::select(dataset, code, criterion);
        table::render_table(&records, &self.labels, &self.citation)
    }

    pub fn chart(&self, dataset: &RawDataset, code: &str, criterion: Criterion) -> String {
        let records = process::select(dataset, code, criterion);
        chart::render_chart(&records, &self.labels, &self.citation)
    }
}

/// Metadata block of every municipality in `year`.
pub fn render_metadata(dataset: &RawDataset, year: u16) -> String {
    metadata::render_metadata(&process::snapshot(dataset, year))
}
