//! Per-country aggregate of finals won and lost.

use serde::Serialize;

/// Wins and runner-up finishes for one country.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountryStats {
    pub country: String,
    pub wins: u32,
    pub runner_up: u32,
}

impl CountryStats {
    pub fn new(country: impl Into<String>, wins: u32, runner_up: u32) -> Self {
        Self {
            country: country.into(),
            wins,
            runner_up,
        }
    }
}

/// Country summary table, one row per country.
///
/// Rows keep the order produced by [`crate::calculate::summarize`]; lookups
/// are linear since the table holds a few dozen rows at most.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CountrySummary {
    rows: Vec<CountryStats>,
}

impl CountrySummary {
    pub fn from_rows(rows: Vec<CountryStats>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[CountryStats] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, country: &str) -> Option<&CountryStats> {
        self.rows.iter().find(|r| r.country == country)
    }

    pub fn countries(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().map(|r| r.country.as_str())
    }

    /// Rows whose country is in `countries`, in table order.
    pub fn subset(&self, countries: &[&str]) -> Vec<CountryStats> {
        self.rows
            .iter()
            .filter(|r| countries.contains(&r.country.as_str()))
            .cloned()
            .collect()
    }
}
