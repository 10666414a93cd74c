//! Chart recomputation for the current selection.

use thiserror::Error;

use crate::chart::{choropleth, Figure};
use crate::models::{CountryStats, Dataset, FilterMode, Selection};

pub const ALL_COUNTRIES_TITLE: &str = "FIFA World Cup Winners - All Countries";

/// A selector offered a value the dataset does not contain.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChartError {
    #[error("No final recorded for year {0}")]
    UnknownYear(u16),

    #[error("No summary row for country '{0}'")]
    UnknownCountry(String),
}

/// Which slice of the summary the chart shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChartView {
    All,
    Country(String),
    Year(u16),
}

impl ChartView {
    /// Resolve the view for a selection.
    ///
    /// A filter mode whose selector is still unset falls back to `All`.
    pub fn for_selection(selection: &Selection) -> Self {
        match (selection.filter_type, &selection.country, selection.year) {
            (FilterMode::Year, _, Some(year)) => ChartView::Year(year),
            (FilterMode::Country, Some(country), _) => ChartView::Country(country.clone()),
            _ => ChartView::All,
        }
    }
}

/// Rows and title for a view.
pub fn chart_rows(
    dataset: &Dataset,
    view: &ChartView,
) -> Result<(Vec<CountryStats>, String), ChartError> {
    let summary = dataset.summary();

    match view {
        ChartView::Year(year) => {
            let record = dataset
                .record_for_year(*year)
                .ok_or(ChartError::UnknownYear(*year))?;
            let rows = summary.subset(&[record.winner.as_str(), record.runner_up.as_str()]);
            let title = format!(
                "FIFA World Cup {} - {} (Winner), {} (Runner-Up)",
                year, record.winner, record.runner_up
            );
            Ok((rows, title))
        }
        ChartView::Country(country) => {
            let row = summary
                .get(country)
                .ok_or_else(|| ChartError::UnknownCountry(country.clone()))?;
            let title = format!(
                "{} - Total Wins: {}, Total Runner-Ups: {}",
                country, row.wins, row.runner_up
            );
            Ok((vec![row.clone()], title))
        }
        ChartView::All => Ok((summary.rows().to_vec(), ALL_COUNTRIES_TITLE.to_string())),
    }
}

/// Build the map for the current filter mode and selections.
pub fn update_graph(dataset: &Dataset, selection: &Selection) -> Result<Figure, ChartError> {
    let view = ChartView::for_selection(selection);
    let (rows, title) = chart_rows(dataset, &view)?;
    Ok(choropleth(&rows, title))
}
