//! Core basin file parser
//!
//! This module drives the sequential scan over one basin's track file,
//! routing header lines to storm construction and data lines to entry
//! parsing, then validating every storm's entry count before anything
//! downstream runs.

use std::path::Path;

use tracing::{debug, info};

use super::header::{is_header_line, parse_storm_header};
use super::record_parser::parse_track_entry;
use super::stats::{ParseResult, ParseStats};
use crate::app::models::Basin;
use crate::{Error, Result};

/// Parser for one basin's track file
///
/// The scan is strictly sequential: each data line belongs to the most
/// recently opened storm, so the accumulator's tail is the active storm.
/// Any failure is fatal to the run; there is no per-line recovery.
#[derive(Debug)]
pub struct BasinParser {
    basin: Basin,
}

impl BasinParser {
    /// Create a parser for the given basin
    pub fn new(basin: Basin) -> Self {
        Self { basin }
    }

    /// Read and parse a basin track file
    pub fn parse_file(&self, file_path: &Path) -> Result<ParseResult> {
        info!(
            "Parsing {} track file: {}",
            self.basin,
            file_path.display()
        );

        let content = std::fs::read_to_string(file_path).map_err(|e| {
            Error::io(
                format!("Failed to read track file '{}'", file_path.display()),
                e,
            )
        })?;

        self.parse_content(&content)
    }

    /// Parse basin file content already held in memory
    pub fn parse_content(&self, content: &str) -> Result<ParseResult> {
        let mut storms = Vec::new();
        let mut stats = ParseStats::new();

        for (index, raw_line) in content.lines().enumerate() {
            let line_number = index + 1;
            let line = raw_line.trim();
            if line.is_empty() {
                continue;
            }
            stats.total_lines += 1;

            if is_header_line(line) {
                let storm = parse_storm_header(line, line_number)?;
                debug!(
                    "Opened storm {} expecting {} entries",
                    storm.filename(),
                    storm.expected_entries
                );
                storms.push(storm);
                stats.headers_parsed += 1;
            } else {
                let entry = parse_track_entry(line, line_number)?;
                let storm = storms.last_mut().ok_or_else(|| {
                    Error::structure(
                        line_number,
                        format!(
                            "data line in {} input has no preceding storm header",
                            self.basin
                        ),
                    )
                })?;
                storm.push_entry(entry);
                stats.entries_parsed += 1;
            }
        }

        // Validate every storm before any output is emitted
        for storm in &storms {
            storm.validate_entry_count()?;
        }

        info!(
            "Parsed {} storms ({} entries) from {} basin",
            stats.headers_parsed, stats.entries_parsed, self.basin
        );

        Ok(ParseResult { storms, stats })
    }
}
