//! Header line recognition and storm shell construction
//!
//! A header line introduces a new storm. Its first field is an 8-character
//! identifier packing basin code, sequence number, and year; the second
//! field is the storm name and the third the declared entry count.

use std::sync::LazyLock;

use regex::Regex;

use super::field_parsers::split_fields;
use crate::app::models::Storm;
use crate::constants::HEADER_FIELD_COUNT;
use crate::{Error, Result};

/// Storm identifier: recognized basin code followed by 2-digit sequence
/// number and 4-digit year, e.g. `AL012023`.
static STORM_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(AL|EP|CP)\d{6}$").expect("storm identifier regex is valid"));

/// Check whether a line is a storm header
///
/// Data lines start with an 8-digit date, so matching the full identifier
/// pattern on the first field cleanly separates the two line kinds.
pub fn is_header_line(line: &str) -> bool {
    let first_field = line.split(',').next().unwrap_or("").trim();
    STORM_ID_RE.is_match(first_field)
}

/// Parse a header line into a new storm shell with an empty entry sequence
pub fn parse_storm_header(line: &str, line_number: usize) -> Result<Storm> {
    let fields = split_fields(line);
    if fields.len() < HEADER_FIELD_COUNT {
        return Err(Error::parse(
            line_number,
            format!(
                "header line has {} fields, expected at least {}",
                fields.len(),
                HEADER_FIELD_COUNT
            ),
        ));
    }

    let identifier = fields[0];
    if !STORM_ID_RE.is_match(identifier) {
        return Err(Error::parse(
            line_number,
            format!("invalid storm identifier '{}'", identifier),
        ));
    }

    // Positional identifier layout: 2-char basin, 2-digit number, 4-digit year
    let basin_code = &identifier[0..2];
    let number = &identifier[2..4];
    let year = &identifier[4..8];

    // Name passes through verbatim, including embedded case
    let name = fields[1];

    let expected_entries: usize = fields[2].parse().map_err(|e| {
        Error::parse(
            line_number,
            format!("invalid entry count '{}' ({})", fields[2], e),
        )
    })?;

    Ok(Storm::new(basin_code, number, year, name, expected_entries))
}
