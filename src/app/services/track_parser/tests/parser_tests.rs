//! Tests for the sequential basin scan and post-scan validation

use super::super::parser::BasinParser;
use super::{create_mismatched_basin_content, create_test_basin_content};
use crate::Error;
use crate::app::models::Basin;

#[test]
fn test_parse_complete_basin() {
    let parser = BasinParser::new(Basin::Atlantic);
    let result = parser.parse_content(&create_test_basin_content()).unwrap();

    assert_eq!(result.storms.len(), 2);
    assert_eq!(result.stats.headers_parsed, 2);
    assert_eq!(result.stats.entries_parsed, 5);
    assert_eq!(result.stats.total_lines, 7);

    let teststorm = &result.storms[0];
    assert_eq!(teststorm.name, "TESTSTORM");
    assert_eq!(teststorm.entries.len(), 2);

    let delta = &result.storms[1];
    assert_eq!(delta.name, "DELTA");
    assert_eq!(delta.entries.len(), 3);
    assert_eq!(delta.entries[2].identifier_code, "L");
}

#[test]
fn test_entries_attach_to_current_storm_in_order() {
    let parser = BasinParser::new(Basin::Atlantic);
    let result = parser.parse_content(&create_test_basin_content()).unwrap();

    let entries = &result.storms[1].entries;
    assert_eq!(entries[0].datetime_utc, "2023-10-02 06:00:00+00:00");
    assert_eq!(entries[1].datetime_utc, "2023-10-02 12:00:00+00:00");
    assert_eq!(entries[2].datetime_utc, "2023-10-02 18:00:00+00:00");
}

#[test]
fn test_data_line_before_header_is_structural_error() {
    let parser = BasinParser::new(Basin::Pacific);
    let content = "20230815, 1800,  , TS, 26.1N,  78.4W,  45, 1002,\n";

    let result = parser.parse_content(content);
    assert!(matches!(result, Err(Error::Structure { line: 1, .. })));
}

#[test]
fn test_entry_count_mismatch_fails_run() {
    let parser = BasinParser::new(Basin::Atlantic);
    let result = parser.parse_content(&create_mismatched_basin_content());

    let err = result.unwrap_err();
    assert!(matches!(err, Error::Validation { .. }));
    // Diagnostic identifies the offending storm by derived filename
    assert!(err.to_string().contains("2023-al-02-delta"));
}

#[test]
fn test_blank_lines_are_skipped() {
    let parser = BasinParser::new(Basin::Atlantic);
    let content = "\nAL012023, TESTSTORM, 1,\n\n20230815, 1800,  , TS, 26.1N, 78.4W, 45, 1002,\n\n";

    let result = parser.parse_content(content).unwrap();
    assert_eq!(result.storms.len(), 1);
    assert_eq!(result.stats.total_lines, 2);
}

#[test]
fn test_empty_input_yields_no_storms() {
    let parser = BasinParser::new(Basin::Atlantic);
    let result = parser.parse_content("").unwrap();
    assert!(result.storms.is_empty());
    assert_eq!(result.stats.total_lines, 0);
}

#[test]
fn test_parse_file_from_disk() {
    use std::io::Write;

    let mut temp_file = tempfile::NamedTempFile::new().unwrap();
    write!(temp_file, "{}", create_test_basin_content()).unwrap();

    let parser = BasinParser::new(Basin::Atlantic);
    let result = parser.parse_file(temp_file.path()).unwrap();
    assert_eq!(result.storms.len(), 2);
}

#[test]
fn test_parse_file_missing_path() {
    let parser = BasinParser::new(Basin::Atlantic);
    let result = parser.parse_file(std::path::Path::new("/nonexistent/atlantic.txt"));
    assert!(matches!(result, Err(Error::Io { .. })));
}
