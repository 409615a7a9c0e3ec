// src/fetch/mod.rs

use reqwest::blocking::Client;
use std::time::Instant;
use thiserror::Error;
use tracing::{debug, info};
use url::Url;

pub mod dataset;

pub use dataset::RawDataset;

/// Reasons a dataset download can fail. Callers treat all of them as a hard stop.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid dataset URL {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("non-success status {status} from {url}")]
    Status { url: String, status: u16 },
}

/// One blocking GET against `url`; the whole body comes back as a [`RawDataset`].
/// No retries, no custom headers.
pub fn fetch_dataset(client: &Client, url: &str) -> Result<RawDataset, FetchError> {
    let url = Url::parse(url)?;
    debug!(%url, "fetching dataset");
    let start = Instant::now();

    let resp = client.get(url.clone()).send()?;
    let status = resp.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let bytes = resp.bytes()?;
    info!(%url, bytes = bytes.len(), elapsed = ?start.elapsed(), "fetched dataset");
    Ok(RawDataset::from_bytes(&bytes))
}
