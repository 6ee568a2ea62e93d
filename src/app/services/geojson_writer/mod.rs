//! GeoJSON artifact emission for processed storms
//!
//! This is the serialization boundary of the pipeline: it turns completed
//! storm entities into per-storm feature collections on disk, organized by
//! basin and year, plus a manifest index listing every processed storm.
//!
//! ## Architecture
//!
//! - [`features`] - Typed GeoJSON structures and storm-to-feature assembly
//! - [`writer`] - Output directory layout and file writing
//! - [`manifest`] - Manifest index construction

pub mod features;
pub mod manifest;
pub mod writer;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use features::{Feature, FeatureCollection, Geometry};
pub use manifest::Manifest;
pub use writer::GeojsonWriter;
