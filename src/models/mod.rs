//! Core data models for the World Cup dashboard.

mod dataset;
mod match_record;
mod selection;
mod summary;

pub use dataset::*;
pub use match_record::*;
pub use selection::*;
pub use summary::*;
