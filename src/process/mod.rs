// src/process/mod.rs
use crate::fetch::RawDataset;
use tracing::{debug, trace};

pub mod filter;
pub mod line;
pub mod utils;

#[cfg(test)]
pub(crate) mod testdata;

pub use filter::{municipality_marker, Criterion};
pub use line::{
    parse_full, parse_year_population, Fields, ParseAnomaly, PopulationRecord, RegionKind,
};

/// Parse every `Persons` row whose fields pass `keep`, in dataset order.
/// Rows with the wrong shape are logged and skipped.
fn scan<F>(dataset: &RawDataset, keep: F) -> Vec<PopulationRecord>
where
    F: Fn(&Fields) -> bool,
{
    let mut rdr = line::csv_reader(dataset.as_str().as_bytes());
    let mut records = Vec::new();
    let mut skipped = 0usize;

    for (idx, result) in rdr.records().enumerate() {
        let parsed = result
            .map_err(ParseAnomaly::from)
            .and_then(|rec| Fields::from_record(&rec))
            .and_then(|f| {
                if f.is_persons() && keep(&f) {
                    PopulationRecord::from_fields(&f).map(Some)
                } else {
                    Ok(None)
                }
            });
        match parsed {
            Ok(Some(rec)) => {
                trace!(record = %rec, "kept row");
                records.push(rec);
            }
            Ok(None) => {}
            Err(anomaly) => {
                trace!(%anomaly, record = idx, "skipping row");
                skipped += 1;
            }
        }
    }

    if skipped > 0 {
        debug!(skipped, kept = records.len(), "rows skipped during scan");
    }
    records
}

/// The series for municipality `code`, thinned out by `criterion`.
/// An empty result means nothing matched.
#[tracing::instrument(level = "debug", skip(dataset))]
pub fn select(dataset: &RawDataset, code: &str, criterion: Criterion) -> Vec<PopulationRecord> {
    let marker = municipality_marker(code);
    let records: Vec<PopulationRecord> = scan(dataset, |f| f.region.starts_with(&marker))
        .into_iter()
        .filter(|r| criterion.matches(r, code))
        .collect();
    if let (Some(first), Some(last)) = (records.first(), records.last()) {
        debug!(%first, %last, selected = records.len(), "selection done");
    } else {
        debug!("nothing selected");
    }
    records
}

/// Every municipality (four-digit code) in `year`, sorted by code.
#[tracing::instrument(level = "debug", skip(dataset))]
pub fn snapshot(dataset: &RawDataset, year: u16) -> Vec<PopulationRecord> {
    let mut records: Vec<PopulationRecord> =
        scan(dataset, |f| f.year.parse::<u16>().ok() == Some(year))
            .into_iter()
            .filter(|r| r.code.len() == 4)
            .collect();
    records.sort_by(|a, b| a.code.cmp(&b.code));
    debug!(entries = records.len(), "snapshot done");
    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::testdata::{init_test_logging, synthetic_dataset};

    #[test]
    fn select_keeps_dataset_order() {
        init_test_logging();
        let ds = synthetic_dataset();
        let years: Vec<u16> = select(&ds, "0301", Criterion::EveryYear)
            .iter()
            .map(|r| r.year)
            .collect();
        assert_eq!(years, (1986..=2023).collect::<Vec<_>>());
    }

    #[test]
    fn select_applies_criterion() {
        let ds = synthetic_dataset();
        let five = select(&ds, "1103", Criterion::EveryFiveYears);
        assert_eq!(five.len(), 8);
        assert_eq!(five[0].year, 1986);
        assert!(five.iter().all(|r| r.code == "1103"));

        let ten: Vec<u16> = select(&ds, "1103", Criterion::EveryTenYears)
            .iter()
            .map(|r| r.year)
            .collect();
        assert_eq!(ten, vec![1990, 2000, 2010, 2020]);
    }

    #[test]
    fn select_does_not_match_partial_codes() {
        let ds = synthetic_dataset();
        assert!(select(&ds, "030", Criterion::EveryYear).is_empty());
        assert!(select(&ds, "03", Criterion::EveryYear).is_empty());
    }

    #[test]
    fn empty_dataset_selects_nothing() {
        let ds = RawDataset::default();
        assert!(select(&ds, "0301", Criterion::EveryYear).is_empty());
        assert!(snapshot(&ds, 2022).is_empty());
    }

    #[test]
    fn snapshot_sorts_and_drops_aggregates() {
        let ds = RawDataset::from_text(
            [
                r#""region","year","contents","26975: Population""#,
                r#""K-1120 Klepp","2022","Persons",20134"#,
                r#""F-03 Oslo","2022","Persons",699827"#,
                r#""K-0301 Oslo - Oslove","2022","Persons",699827"#,
                r#""K-0301 Oslo - Oslove","2021","Persons",697010"#,
            ]
            .join("\n"),
        );
        let codes: Vec<String> = snapshot(&ds, 2022).into_iter().map(|r| r.code).collect();
        assert_eq!(codes, vec!["0301", "1120"]);
    }

    #[test]
    fn malformed_rows_are_skipped_not_fatal() {
        let ds = RawDataset::from_text(
            [
                r#""K-0301 Oslo","1986","Persons",.."#,
                r#""K-0301 Oslo","1987""#,
                r#""K-0301 Oslo","1988","Persons",451000"#,
            ]
            .join("\n"),
        );
        let recs = select(&ds, "0301", Criterion::EveryYear);
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].population, 451000);
    }

    #[test]
    fn escaped_quotes_survive_scan() {
        let ds = RawDataset::from_text(
            [
                r#""K-0301 Oslo ""sentrum""","2022","Persons",699827"#,
                r#""K-1120 Klepp","2022","Persons",20134"#,
            ]
            .join("\r\n"),
        );
        let recs = snapshot(&ds, 2022);
        assert_eq!(recs.len(), 2);
        assert_eq!(recs[0].name, "Oslo \"sentrum\"");
        assert_eq!(select(&ds, "0301", Criterion::EveryYear).len(), 1);
    }
}
