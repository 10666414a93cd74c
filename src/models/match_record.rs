//! One World Cup final per row.

use serde::{Deserialize, Serialize};

/// A single tournament edition: who won the final and who lost it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    /// Tournament year, unique across the file
    #[serde(rename = "Year")]
    pub year: u16,

    /// Winning country name
    #[serde(rename = "Winners")]
    pub winner: String,

    /// Runner-up country name
    #[serde(rename = "Runners-up")]
    pub runner_up: String,
}

impl MatchRecord {
    pub fn new(year: u16, winner: impl Into<String>, runner_up: impl Into<String>) -> Self {
        Self {
            year,
            winner: winner.into(),
            runner_up: runner_up.into(),
        }
    }
}
