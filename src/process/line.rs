use crate::process::utils::normalize_name;
use csv::{Reader, ReaderBuilder, StringRecord, Trim};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::io::Read;
use thiserror::Error;

/// Columns of table 26975: region, year, contents, value.
pub const FIELD_COUNT: usize = 4;

/// Value of the contents column on population rows.
pub const PERSONS: &str = "Persons";

/// `K-0301 Oslo - Oslove`, `F-03 Oslo`, `0 The whole country`.
static REGION_LABEL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:([KF])-)?(\d{1,4}) +(.+)$").expect("region regex"));

/// A row that does not have the expected column shape. Such rows are skipped.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseAnomaly {
    #[error("malformed CSV: {0}")]
    Quoting(String),
    #[error("expected 4 fields, found {0}")]
    FieldCount(usize),
    #[error("unrecognised region label {0:?}")]
    Region(String),
    #[error("invalid year {0:?}")]
    Year(String),
    #[error("invalid population {0:?}")]
    Population(String),
}

impl From<csv::Error> for ParseAnomaly {
    fn from(e: csv::Error) -> Self {
        ParseAnomaly::Quoting(e.to_string())
    }
}

/// Headerless reader over SSB rows. The header row comes through as an
/// ordinary record and fails the `Persons` check downstream.
pub fn csv_reader<R: Read>(input: R) -> Reader<R> {
    ReaderBuilder::new()
        .has_headers(false)
        .flexible(true) // short rows surface as FieldCount, not a hard error
        .trim(Trim::All)
        .from_reader(input)
}

/// The four columns of a row, quotes removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fields {
    pub region: String,
    pub year: String,
    pub contents: String,
    pub value: String,
}

impl Fields {
    pub fn from_record(record: &StringRecord) -> Result<Self, ParseAnomaly> {
        if record.len() != FIELD_COUNT {
            return Err(ParseAnomaly::FieldCount(record.len()));
        }
        Ok(Self {
            region: record[0].to_string(),
            year: record[1].to_string(),
            contents: record[2].to_string(),
            value: record[3].to_string(),
        })
    }

    /// Fields of a single line.
    pub fn parse(line: &str) -> Result<Self, ParseAnomaly> {
        let mut rdr = csv_reader(line.as_bytes());
        match rdr.records().next() {
            Some(record) => Self::from_record(&record?),
            None => Err(ParseAnomaly::FieldCount(0)),
        }
    }

    pub fn is_persons(&self) -> bool {
        self.contents == PERSONS
    }
}

/// Raw year and population columns of a row, untouched.
pub fn parse_year_population(line: &str) -> Result<(String, String), ParseAnomaly> {
    let f = Fields::parse(line)?;
    Ok((f.year, f.value))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionKind {
    Municipality,
    County,
    Country,
}

/// One parsed population row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PopulationRecord {
    pub year: u16,
    pub population: u32,
    pub code: String,
    pub name: String,
    pub kind: RegionKind,
}

impl PopulationRecord {
    pub fn from_fields(f: &Fields) -> Result<Self, ParseAnomaly> {
        let caps = REGION_LABEL
            .captures(&f.region)
            .ok_or_else(|| ParseAnomaly::Region(f.region.to_string()))?;
        let kind = match caps.get(1).map(|m| m.as_str()) {
            Some("K") => RegionKind::Municipality,
            Some(_) => RegionKind::County,
            None => RegionKind::Country,
        };

        let year = match f.year.parse::<u16>() {
            Ok(y) if f.year.len() == 4 => y,
            _ => return Err(ParseAnomaly::Year(f.year.to_string())),
        };
        // SSB marks missing values with ".", ".." or ":"
        let population = f
            .value
            .parse::<u32>()
            .map_err(|_| ParseAnomaly::Population(f.value.to_string()))?;

        Ok(Self {
            year,
            population,
            code: caps[2].to_string(),
            name: normalize_name(&caps[3]),
            kind,
        })
    }
}

impl fmt::Display for PopulationRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} ({}): {}",
            self.code, self.name, self.year, self.population
        )
    }
}

/// Year, population, code and name of a row.
pub fn parse_full(line: &str) -> Result<PopulationRecord, ParseAnomaly> {
    PopulationRecord::from_fields(&Fields::parse(line)?)
}
