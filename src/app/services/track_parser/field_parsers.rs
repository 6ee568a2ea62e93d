//! Field parsing utilities for track lines
//!
//! This module provides helper functions for parsing the individual fields
//! of header and data lines with proper error reporting.

use crate::{Error, Result};

/// Split a comma-delimited track line into trimmed fields
pub fn split_fields(line: &str) -> Vec<&str> {
    line.split(',').map(str::trim).collect()
}

/// Parse a required numeric field as f64
pub fn parse_required_f64(value: &str, field_name: &str, line_number: usize) -> Result<f64> {
    value.parse::<f64>().map_err(|e| {
        Error::parse(
            line_number,
            format!("invalid numeric value for {}: '{}' ({})", field_name, value, e),
        )
    })
}

/// Parse a coordinate field carrying a hemisphere letter in its final
/// character.
///
/// The result is the magnitude, negated when the final character equals
/// `negative_suffix` (`S` for latitude, `W` for longitude). Any other
/// suffix leaves the magnitude positive; the letter itself is not
/// validated, matching the source convention.
pub fn parse_hemisphere_coordinate(
    value: &str,
    negative_suffix: char,
    field_name: &str,
    line_number: usize,
) -> Result<f64> {
    let mut chars = value.chars();
    let hemisphere = chars.next_back().ok_or_else(|| {
        Error::parse(line_number, format!("empty {} field", field_name))
    })?;

    let magnitude = parse_required_f64(chars.as_str(), field_name, line_number)?;

    if hemisphere == negative_suffix {
        Ok(-magnitude)
    } else {
        Ok(magnitude)
    }
}

/// Assemble the fixed-offset UTC timestamp from the date and time fields.
///
/// The timestamp is a literal string `YYYY-MM-DD HH:MM:00+00:00` built by
/// slicing the 8-digit date and 4-digit time; no datetime library is
/// involved and seconds are always zero.
pub fn assemble_timestamp(date: &str, time: &str, line_number: usize) -> Result<String> {
    if date.len() != 8 || !date.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::parse(
            line_number,
            format!("invalid date field '{}' (expected 8 digits YYYYMMDD)", date),
        ));
    }
    if time.len() != 4 || !time.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::parse(
            line_number,
            format!("invalid time field '{}' (expected 4 digits HHMM)", time),
        ));
    }

    Ok(format!(
        "{}-{}-{} {}:{}:00+00:00",
        &date[0..4],
        &date[4..6],
        &date[6..8],
        &time[0..2],
        &time[2..4]
    ))
}
