//! Raw record as read from the source file.

use serde::{Deserialize, Serialize};

/// One reported observation, before any derivation.
///
/// `ref_area` is a resource URL whose last path segment names the region,
/// `ref_period` embeds the month and year as `MM-YYYY`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawRecord {
    pub ref_area: String,
    pub ref_period: String,
    /// `None` when the source cell is empty or not a finite number
    pub cases: Option<f64>,
}

impl RawRecord {
    /// Create a new raw record.
    pub fn new(ref_area: impl Into<String>, ref_period: impl Into<String>, cases: Option<f64>) -> Self {
        Self {
            ref_area: ref_area.into(),
            ref_period: ref_period.into(),
            cases,
        }
    }
}
