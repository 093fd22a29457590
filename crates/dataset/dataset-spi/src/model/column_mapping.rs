//! Source column names.

use serde::{Deserialize, Serialize};

/// Header names of the three columns the loader reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnMapping {
    /// Resource URL naming the region
    pub area: String,
    /// Period string embedding `MM-YYYY`
    pub period: String,
    /// Nullable numeric case count
    pub cases: String,
}

impl Default for ColumnMapping {
    fn default() -> Self {
        Self {
            area: "refArea".to_string(),
            period: "refPeriod".to_string(),
            cases: "Number of cases".to_string(),
        }
    }
}
