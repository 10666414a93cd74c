//! Loading the World Cup finals file.
//!
//! The file is a CSV with a header row. Only the `Year`, `Winners` and
//! `Runners-up` columns are read; any other column is ignored. Loading is
//! all-or-nothing: the first bad row aborts with a [`LoadError`].

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info};

use crate::models::{Dataset, MatchRecord};

/// Columns that must be present in the header row.
pub const REQUIRED_COLUMNS: [&str; 3] = ["Year", "Winners", "Runners-up"];

/// Errors that can occur while loading the finals file.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {}: {source}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("{} is missing required column '{column}'", .path.display())]
    MissingColumn { path: PathBuf, column: &'static str },

    #[error("{}: year {year} on line {line} was already listed on line {first_line}", .path.display())]
    DuplicateYear {
        path: PathBuf,
        year: u16,
        line: u64,
        first_line: u64,
    },

    #[error("{}: empty '{column}' on line {line}", .path.display())]
    EmptyCountry {
        path: PathBuf,
        line: u64,
        column: &'static str,
    },
}

/// Load the finals file at `path` and build the dataset.
pub fn load_dataset(path: &Path) -> Result<Dataset, LoadError> {
    let records = load_records(path)?;
    let dataset = Dataset::new(records);
    info!(
        "Loaded {} finals covering {} countries from {}",
        dataset.records().len(),
        dataset.summary().len(),
        path.display()
    );
    Ok(dataset)
}

/// Read match records from the file at `path`, in file order.
pub fn load_records(path: &Path) -> Result<Vec<MatchRecord>, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    read_records(file, path)
}

/// Read match records from any reader. `origin` only labels errors.
pub fn read_records<R: Read>(reader: R, origin: &Path) -> Result<Vec<MatchRecord>, LoadError> {
    let csv_err = |source: csv::Error| LoadError::Csv {
        path: origin.to_path_buf(),
        source,
    };

    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = rdr.headers().map_err(csv_err)?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(LoadError::MissingColumn {
                path: origin.to_path_buf(),
                column,
            });
        }
    }

    let mut records = Vec::new();
    let mut seen: HashMap<u16, u64> = HashMap::new();

    for row in rdr.records() {
        let row = row.map_err(csv_err)?;
        let line = row.position().map(|p| p.line()).unwrap_or_default();
        let record: MatchRecord = row.deserialize(Some(&headers)).map_err(csv_err)?;

        for (column, value) in [("Winners", &record.winner), ("Runners-up", &record.runner_up)] {
            if value.is_empty() {
                return Err(LoadError::EmptyCountry {
                    path: origin.to_path_buf(),
                    line,
                    column,
                });
            }
        }

        if let Some(&first_line) = seen.get(&record.year) {
            return Err(LoadError::DuplicateYear {
                path: origin.to_path_buf(),
                year: record.year,
                line,
                first_line,
            });
        }
        seen.insert(record.year, line);

        debug!("{}: {} beat {}", record.year, record.winner, record.runner_up);
        records.push(record);
    }

    Ok(records)
}
