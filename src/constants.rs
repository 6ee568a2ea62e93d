//! Application constants for HURDAT processor
//!
//! This module contains format constants, classification thresholds, and
//! output naming conventions used throughout the HURDAT processor.

// =============================================================================
// Track File Format
// =============================================================================

/// Basin code prefixes that mark a line as a storm header
pub const HEADER_BASIN_PREFIXES: &[&str] = &["AL", "EP", "CP"];

/// Number of fields a header line must carry (identifier, name, entry count)
pub const HEADER_FIELD_COUNT: usize = 3;

/// Number of fields a data line must carry
pub const ENTRY_FIELD_COUNT: usize = 8;

/// Basin code (lowercased) whose storms are excluded from geometry emission.
/// Central Pacific track lines cross the antimeridian and produce broken
/// LineStrings, so their per-storm files are never written.
pub const CENTRAL_PACIFIC_CODE: &str = "cp";

/// Default per-basin input file names
pub const ATLANTIC_INPUT_FILENAME: &str = "atlantic.txt";
pub const PACIFIC_INPUT_FILENAME: &str = "pacific.txt";

// =============================================================================
// Classification Thresholds (knots, evaluated ascending, first match wins)
// =============================================================================

pub mod thresholds {
    /// Peak wind at or below this is a tropical depression
    pub const TROPICAL_DEPRESSION_MAX: f64 = 33.0;

    /// Peak wind at or below this is a tropical storm
    pub const TROPICAL_STORM_MAX: f64 = 63.0;

    /// Peak wind at or below this is a category 1 hurricane
    pub const CATEGORY_1_MAX: f64 = 82.0;

    /// Peak wind at or below this is a category 2 hurricane
    pub const CATEGORY_2_MAX: f64 = 95.0;

    /// Peak wind at or below this is a category 3 hurricane
    pub const CATEGORY_3_MAX: f64 = 112.0;

    /// Peak wind at or below this is a category 4 hurricane
    pub const CATEGORY_4_MAX: f64 = 136.0;

    /// Peak wind at or above this is a category 5 hurricane.
    /// The open interval (136, 137) is unreachable with integral wind
    /// speeds and is preserved as-specified; fractional values in the gap
    /// classify as unknown.
    pub const CATEGORY_5_MIN: f64 = 137.0;
}

// =============================================================================
// GeoJSON Property Keys
// =============================================================================

pub mod properties {
    /// Optional record identifier code on a point feature
    pub const ID_CODE: &str = "id-code";

    /// System status code on a point feature
    pub const STATUS: &str = "status";

    /// Sustained wind speed in knots on a point feature
    pub const WIND_SPEED: &str = "wind-speed";

    /// ISO-8601 observation timestamp on a point feature
    pub const DATETIME_UTC: &str = "datetime-utc";

    /// Minimum central pressure in millibars on a point feature
    pub const PRESSURE_MB: &str = "pressure-mb";

    /// Storm name on a per-storm collection
    pub const NAME: &str = "name";

    /// Basin code on a per-storm collection
    pub const BASIN: &str = "basin";

    /// Storm year on a per-storm collection
    pub const YEAR: &str = "year";

    /// Storm sequence number on a per-storm collection
    pub const NUMBER: &str = "number";

    /// Derived peak wind speed on a summary line feature
    pub const MAX_WIND_SPEED_KNOTS: &str = "max-wind-speed-knots";

    /// Derived classification code on a summary line feature
    pub const CLASSIFICATION: &str = "classification";
}

// =============================================================================
// Output Layout
// =============================================================================

/// Extension for all emitted geometry files
pub const GEOJSON_EXTENSION: &str = "geojson";

/// Filename suffix (before the extension) marking a per-year summary file
pub const SUMMARY_FILE_SUFFIX: &str = "_summary";

/// Name of the manifest index file at the output root
pub const MANIFEST_FILENAME: &str = "manifest.json";
