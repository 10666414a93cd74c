//! Pure functions recomputing UI outputs from UI inputs.
//!
//! Neither reactor keeps state between calls: the same inputs against the
//! same [`Dataset`](crate::models::Dataset) always give the same outputs.

pub mod chart;
pub mod filter;

pub use chart::{update_graph, ChartError, ChartView};
pub use filter::{toggle_dropdowns, SelectorState, Visibility};
