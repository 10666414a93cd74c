//! Transient UI selection state sent by the browser.

use serde::{Deserialize, Serialize};

/// Which filter the user picked in the radio group.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterMode {
    #[default]
    All,
    Country,
    Year,
}

impl FilterMode {
    pub const ALL: [FilterMode; 3] = [FilterMode::All, FilterMode::Country, FilterMode::Year];

    pub fn as_str(&self) -> &'static str {
        match self {
            FilterMode::All => "all",
            FilterMode::Country => "country",
            FilterMode::Year => "year",
        }
    }

    /// Label shown next to the radio button.
    pub fn label(&self) -> &'static str {
        match self {
            FilterMode::All => " Show All",
            FilterMode::Country => " Filter by Country",
            FilterMode::Year => " Filter by Year",
        }
    }
}

impl std::fmt::Display for FilterMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Current values of the three input controls.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    #[serde(default)]
    pub filter_type: FilterMode,

    #[serde(default)]
    pub country: Option<String>,

    #[serde(default)]
    pub year: Option<u16>,
}

impl Selection {
    pub fn new(filter_type: FilterMode) -> Self {
        Self {
            filter_type,
            ..Default::default()
        }
    }

    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    pub fn with_year(mut self, year: u16) -> Self {
        self.year = Some(year);
        self
    }
}
