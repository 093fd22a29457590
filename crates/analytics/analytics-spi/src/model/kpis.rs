//! Headline metrics.

use serde::{Deserialize, Serialize};

/// Summary numbers shown above the charts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Kpis {
    pub total_cases: f64,
    /// Distinct months with at least one row
    pub months_covered: usize,
    /// Distinct governorates with at least one row
    pub regions_covered: usize,
}

impl Kpis {
    /// Total rendered as a whole number, truncating any fraction.
    pub fn total_cases_display(&self) -> i64 {
        self.total_cases.trunc() as i64
    }
}
