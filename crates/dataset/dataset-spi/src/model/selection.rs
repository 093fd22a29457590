//! User filter selection.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::{CleanRecord, CleanTable};

/// Chosen years and governorates.
///
/// A record passes when its year AND its governorate are both chosen, so an
/// empty set on either side selects nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub years: BTreeSet<String>,
    pub governorates: BTreeSet<String>,
}

impl Selection {
    pub fn new<Y, G>(years: Y, governorates: G) -> Self
    where
        Y: IntoIterator,
        Y::Item: Into<String>,
        G: IntoIterator,
        G::Item: Into<String>,
    {
        Self {
            years: years.into_iter().map(Into::into).collect(),
            governorates: governorates.into_iter().map(Into::into).collect(),
        }
    }

    /// Every year and governorate present in `table`.
    pub fn all(table: &CleanTable) -> Self {
        Self::new(table.years(), table.governorates())
    }

    pub fn matches(&self, record: &CleanRecord) -> bool {
        self.years.contains(&record.year) && self.governorates.contains(&record.governorate)
    }

    pub fn is_empty(&self) -> bool {
        self.years.is_empty() || self.governorates.is_empty()
    }

    /// Flip one year in or out of the selection.
    pub fn toggle_year(&mut self, year: &str) {
        if !self.years.remove(year) {
            self.years.insert(year.to_string());
        }
    }

    /// Flip one governorate in or out of the selection.
    pub fn toggle_governorate(&mut self, governorate: &str) {
        if !self.governorates.remove(governorate) {
            self.governorates.insert(governorate.to_string());
        }
    }
}
