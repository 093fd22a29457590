//! The cleaned dataset.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::CleanRecord;

/// Clean records in source-file order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CleanTable {
    records: Vec<CleanRecord>,
}

impl CleanTable {
    pub fn new(records: Vec<CleanRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[CleanRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CleanRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Sorted distinct years present in the table.
    pub fn years(&self) -> Vec<String> {
        self.records
            .iter()
            .map(|r| r.year.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Sorted distinct governorates present in the table.
    pub fn governorates(&self) -> Vec<String> {
        self.records
            .iter()
            .map(|r| r.governorate.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Sum of `cases` over every row.
    pub fn total_cases(&self) -> f64 {
        self.records.iter().map(|r| r.cases).sum()
    }
}

impl<'a> IntoIterator for &'a CleanTable {
    type Item = &'a CleanRecord;
    type IntoIter = std::slice::Iter<'a, CleanRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl FromIterator<CleanRecord> for CleanTable {
    fn from_iter<I: IntoIterator<Item = CleanRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
