use crate::config::{Citation, Labels};
use crate::process::PopulationRecord;
use crate::render::format::format_population;

/// Two-row wikitable: years across the header, populations below.
/// Empty when `records` is.
pub fn render_table(records: &[PopulationRecord], labels: &Labels, citation: &Citation) -> String {
    if records.is_empty() {
        return String::new();
    }

    let mut header = format!("! {}", labels.year);
    let mut data = format!("| {}{}", labels.population, citation.to_wikitext());
    for rec in records {
        header.push_str(&format!(" !! {}", rec.year));
        data.push_str(&format!(" || {}", format_population(rec.population)));
    }

    format!("{{| class=\"wikitable\"\n{}\n|-\n{}\n|}}\n", header, data)
}
