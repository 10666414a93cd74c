//! Immutable dataset shared by every session.

use super::{CountrySummary, MatchRecord};
use crate::calculate::summarize;

/// Match records in file order plus the summary derived from them.
///
/// Built once at startup and never mutated afterwards.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Vec<MatchRecord>,
    summary: CountrySummary,
}

impl Dataset {
    /// Build a dataset, computing the country summary from the records.
    pub fn new(records: Vec<MatchRecord>) -> Self {
        let summary = summarize(&records);
        Self { records, summary }
    }

    pub fn records(&self) -> &[MatchRecord] {
        &self.records
    }

    pub fn summary(&self) -> &CountrySummary {
        &self.summary
    }

    /// Look up the final played in `year`.
    pub fn record_for_year(&self, year: u16) -> Option<&MatchRecord> {
        self.records.iter().find(|r| r.year == year)
    }

    /// Years in file order, one per edition.
    pub fn years(&self) -> impl Iterator<Item = u16> + '_ {
        self.records.iter().map(|r| r.year)
    }
}
