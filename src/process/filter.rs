use crate::process::line::{PopulationRecord, RegionKind};
use std::fmt;

/// Which years of a municipality's series to keep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Criterion {
    EveryYear,
    /// Multiples of five, plus 1986 where the series starts.
    EveryFiveYears,
    EveryTenYears,
}

/// First year of table 26975.
pub const FIRST_YEAR: u16 = 1986;

impl Criterion {
    pub fn accepts_year(self, year: u16) -> bool {
        match self {
            Criterion::EveryYear => true,
            Criterion::EveryFiveYears => year == FIRST_YEAR || year % 5 == 0,
            Criterion::EveryTenYears => year % 10 == 0,
        }
    }

    /// Municipality row for exactly `code`, in an accepted year.
    pub fn matches(self, record: &PopulationRecord, code: &str) -> bool {
        record.kind == RegionKind::Municipality
            && record.code == code
            && self.accepts_year(record.year)
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Criterion::EveryYear => "every-year",
            Criterion::EveryFiveYears => "every-five-years",
            Criterion::EveryTenYears => "every-ten-years",
        })
    }
}

/// `K-<code> ` as it appears in the region column. The trailing space keeps
/// `K-030` from matching `K-0301`.
pub fn municipality_marker(code: &str) -> String {
    format!("K-{} ", code)
}
