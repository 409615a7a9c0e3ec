use crate::process::PopulationRecord;

/// `| <code> = <population> <!-- <name> -->`, one line per entry, in the
/// order given.
pub fn render_metadata(entries: &[PopulationRecord]) -> String {
    entries
        .iter()
        .map(|e| format!("| {} = {} <!-- {} -->\n", e.code, e.population, e.name))
        .collect()
}
