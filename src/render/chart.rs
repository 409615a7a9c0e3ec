use crate::config::{Citation, Labels};
use crate::process::PopulationRecord;
use crate::render::format::two_digit_year;

const WIDTH: u32 = 600;
const HEIGHT: u32 = 250;

/// `{{Graph:Chart}}` line chart of the series plus a captioned citation.
///
/// An empty series renders nothing instead of an axis-less chart.
pub fn render_chart(records: &[PopulationRecord], labels: &Labels, citation: &Citation) -> String {
    let Some(first) = records.first() else {
        return String::new();
    };

    let x = records
        .iter()
        .map(|r| two_digit_year(r.year))
        .collect::<Vec<_>>()
        .join(",");
    let y = records
        .iter()
        .map(|r| r.population.to_string())
        .collect::<Vec<_>>()
        .join(",");

    let mut out = String::new();
    out.push_str("{{Graph:Chart\n");
    out.push_str(&format!("|width={}\n|height={}\n", WIDTH, HEIGHT));
    out.push_str("|type=line\n");
    out.push_str(&format!("|xAxisTitle={}\n", labels.year));
    out.push_str(&format!("|yAxisTitle={}\n", labels.population));
    out.push_str(&format!("|x={}\n", x));
    out.push_str(&format!("|y={}\n", y));
    out.push_str("|showSymbols=1\n");
    out.push_str("}}\n");
    // Graph:Chart takes no title parameter, so title and reference sit below it
    out.push_str(&format!(
        "<small>{} {}{}</small>\n",
        labels.chart_title,
        first.name,
        citation.to_wikitext()
    ));
    out
}
