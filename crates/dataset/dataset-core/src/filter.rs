//! Filter stage.

use tracing::debug;

use dataset_spi::{CleanTable, Selection};

/// Rows whose year is in the chosen years AND whose governorate is in the
/// chosen governorates.
///
/// An empty selection on either side yields an empty table.
pub fn filter_table(table: &CleanTable, selection: &Selection) -> CleanTable {
    let filtered: CleanTable = table
        .iter()
        .filter(|r| selection.matches(r))
        .cloned()
        .collect();

    debug!(
        input = table.len(),
        output = filtered.len(),
        years = selection.years.len(),
        governorates = selection.governorates.len(),
        "applied selection"
    );
    filtered
}
