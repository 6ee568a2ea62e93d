//! Parser for fixed-format HURDAT-style basin track files
//!
//! A basin file is a flat sequence of comma-delimited lines: header lines
//! introduce a storm (identity plus declared entry count) and every
//! following data line is a track observation belonging to the most
//! recently opened storm.
//!
//! ## Architecture
//!
//! - [`parser`] - Sequential scan over a basin file, storm accumulation
//! - [`header`] - Header line recognition and storm shell construction
//! - [`record_parser`] - Individual track entry parsing
//! - [`field_parsers`] - Field-level parsing helpers (coordinates, timestamps)
//! - [`stats`] - Parsing statistics and result structures
//!
//! ## Usage
//!
//! ```rust,no_run
//! use hurdat_processor::app::services::track_parser::BasinParser;
//! use hurdat_processor::Basin;
//!
//! # fn example() -> hurdat_processor::Result<()> {
//! let parser = BasinParser::new(Basin::Atlantic);
//! let result = parser.parse_file(std::path::Path::new("atlantic.txt"))?;
//!
//! println!("Parsed {} storms with {} entries",
//!          result.storms.len(),
//!          result.stats.entries_parsed);
//! # Ok(())
//! # }
//! ```

pub mod field_parsers;
pub mod header;
pub mod parser;
pub mod record_parser;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use parser::BasinParser;
pub use stats::{ParseResult, ParseStats};
