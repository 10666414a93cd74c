//! # World Cup Map
//!
//! A local dashboard showing FIFA World Cup winners and runner-ups on a
//! choropleth world map, filterable by country or by year.
//!
//! ## Architecture
//!
//! - **models**: Match records, country summary, UI selection state
//! - **ingest**: Loading the finals CSV file
//! - **calculate**: Aggregating finals into the country summary
//! - **chart**: Choropleth figure description
//! - **layout**: Declarative page tree and its HTML rendering
//! - **reactors**: Pure functions from UI inputs to UI outputs
//! - **reactive**: Dependency graph wiring the reactors together
//! - **api**: HTTP endpoints
//! - **config**: Configuration loading and validation

pub mod api;
pub mod calculate;
pub mod chart;
pub mod config;
pub mod ingest;
pub mod layout;
pub mod models;
pub mod reactive;
pub mod reactors;

pub use models::*;
