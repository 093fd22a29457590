//! Headline metrics over a filtered table.

use std::collections::HashSet;

use analytics_spi::Kpis;
use dataset_spi::CleanTable;

/// Total cases, distinct months and distinct governorates. All zero for an
/// empty table.
pub fn summarize(table: &CleanTable) -> Kpis {
    let months: HashSet<_> = table.iter().map(|r| r.date).collect();
    let regions: HashSet<_> = table.iter().map(|r| r.governorate.as_str()).collect();

    Kpis {
        total_cases: table.total_cases(),
        months_covered: months.len(),
        regions_covered: regions.len(),
    }
}
