use chrono::NaiveDate;

/// Statistics Norway table 26975: population by region, year and contents.
pub const SSB_URL: &str = "https://data.ssb.no/api/v0/dataset/26975.csv?lang=en";

/// Year used for the metadata snapshot.
pub const REFERENCE_YEAR: u16 = 2022;

/// Fixed run parameters; there is no config file.
#[derive(Debug, Clone)]
pub struct Settings {
    pub dataset_url: String,
    pub reference_year: u16,
    pub source_title: String,
    pub publisher: String,
    pub labels: Labels,
}

/// Captions used in the wikitext (German wiki conventions).
#[derive(Debug, Clone)]
pub struct Labels {
    pub year: String,
    pub population: String,
    /// Chart caption, followed by the municipality name.
    pub chart_title: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            year: "Jahr".to_string(),
            population: "Einwohner".to_string(),
            chart_title: "Einwohnerentwicklung von".to_string(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            dataset_url: SSB_URL.to_string(),
            reference_year: REFERENCE_YEAR,
            source_title: "Population, by region, year and contents".to_string(),
            publisher: "Statistisk sentralbyrå".to_string(),
            labels: Labels::default(),
        }
    }
}

impl Settings {
    /// Citation pointing at the dataset, accessed on `accessed`.
    pub fn citation(&self, accessed: NaiveDate) -> Citation {
        Citation {
            url: self.dataset_url.clone(),
            title: self.source_title.clone(),
            publisher: self.publisher.clone(),
            accessed,
        }
    }
}

/// Source reference embedded in tables and charts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Citation {
    pub url: String,
    pub title: String,
    pub publisher: String,
    pub accessed: NaiveDate,
}

impl Citation {
    /// `<ref>{{Internetquelle ...}}</ref>` with the access date as `YYYY-MM-DD`.
    pub fn to_wikitext(&self) -> String {
        format!(
            "<ref>{{{{Internetquelle |url={} |titel={} |hrsg={} |abruf={} |sprache=en}}}}</ref>",
            self.url,
            self.title,
            self.publisher,
            self.accessed.format("%Y-%m-%d"),
        )
    }
}
