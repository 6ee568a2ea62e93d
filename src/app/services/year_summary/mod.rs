//! Per-year summary aggregation over emitted storm artifacts
//!
//! This is the second pass of the pipeline: it reads per-storm GeoJSON
//! files back from the output tree (it does not reuse in-memory state from
//! the parse pass), computes each storm's peak wind speed and intensity
//! classification, and bundles every storm's annotated track line for a
//! (basin, year) pair into one summary collection.

pub mod aggregator;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use aggregator::{YearAggregator, SummaryStats};
