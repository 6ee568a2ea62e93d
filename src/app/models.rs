//! Data models for HURDAT processing
//!
//! This module contains the core data structures representing ocean basins,
//! storm entities, individual track observations, and the derived intensity
//! classification scale.

use crate::constants::{self, thresholds};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Basin
// =============================================================================

/// Ocean basin under which storms are grouped
///
/// Each basin is processed from its own flat track file and emitted under
/// its own output directory. Note that the Pacific file can contain storms
/// carrying the Central Pacific (`CP`) basin code in their headers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Basin {
    Atlantic,
    Pacific,
}

impl Basin {
    /// All basins, in processing order
    pub const ALL: [Basin; 2] = [Basin::Atlantic, Basin::Pacific];

    /// Directory name used under the output root
    pub fn dir_name(&self) -> &'static str {
        match self {
            Basin::Atlantic => "atlantic",
            Basin::Pacific => "pacific",
        }
    }

    /// Default name of the basin's input track file
    pub fn input_filename(&self) -> &'static str {
        match self {
            Basin::Atlantic => constants::ATLANTIC_INPUT_FILENAME,
            Basin::Pacific => constants::PACIFIC_INPUT_FILENAME,
        }
    }
}

impl fmt::Display for Basin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.dir_name())
    }
}

impl FromStr for Basin {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "atlantic" => Ok(Basin::Atlantic),
            "pacific" => Ok(Basin::Pacific),
            _ => Err(Error::configuration(format!(
                "Unknown basin '{}': must be 'atlantic' or 'pacific'",
                s
            ))),
        }
    }
}

// =============================================================================
// Track Entry
// =============================================================================

/// A single fixed-time observation of a storm's position and intensity
///
/// Immutable once constructed and owned exclusively by its parent [`Storm`].
/// The timestamp is carried as the literal ISO-8601 string assembled by the
/// parser (`YYYY-MM-DD HH:MM:00+00:00`), not as a library datetime.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    /// Observation timestamp in UTC, seconds always zero
    pub datetime_utc: String,

    /// Optional record identifier code, often blank
    pub identifier_code: String,

    /// System status code (opaque, not validated)
    pub system_status: String,

    /// Latitude in degrees, negative in the southern hemisphere
    pub latitude: f64,

    /// Longitude in degrees, negative in the western hemisphere
    pub longitude: f64,

    /// Maximum sustained wind speed in knots
    pub wind_speed: f64,

    /// Minimum central pressure in millibars (sentinel values pass through)
    pub pressure_mb: f64,
}

// =============================================================================
// Storm
// =============================================================================

/// A storm entity assembled from one header line and its track entries
///
/// Created on header sight with an empty entry sequence, mutated only by
/// appending entries until the next header or end of input, then validated
/// against its declared entry count before any output is emitted.
#[derive(Debug, Clone, PartialEq)]
pub struct Storm {
    /// Two-letter basin code from the header (e.g. "AL", "EP", "CP")
    pub basin_code: String,

    /// Two-digit sequence number within the year
    pub number: String,

    /// Four-digit year
    pub year: String,

    /// Storm name, verbatim from the header
    pub name: String,

    /// Entry count declared in the source header
    pub expected_entries: usize,

    /// Track entries in insertion (chronological) order
    pub entries: Vec<Entry>,
}

impl Storm {
    /// Create a new storm shell with an empty entry sequence
    pub fn new(
        basin_code: impl Into<String>,
        number: impl Into<String>,
        year: impl Into<String>,
        name: impl Into<String>,
        expected_entries: usize,
    ) -> Self {
        Self {
            basin_code: basin_code.into(),
            number: number.into(),
            year: year.into(),
            name: name.into(),
            expected_entries,
            entries: Vec::with_capacity(expected_entries),
        }
    }

    /// Append a track entry to the storm
    pub fn push_entry(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    /// Filename-safe identifier: lowercase `{year}-{basin}-{number}-{name}`
    pub fn filename(&self) -> String {
        format!(
            "{}-{}-{}-{}",
            self.year, self.basin_code, self.number, self.name
        )
        .to_lowercase()
    }

    /// Check the accumulated entry count against the declared count
    pub fn validate_entry_count(&self) -> Result<()> {
        if self.entries.len() != self.expected_entries {
            return Err(Error::validation(format!(
                "wrong number of entries for storm {}: header declared {}, found {}",
                self.filename(),
                self.expected_entries,
                self.entries.len()
            )));
        }
        Ok(())
    }

    /// Whether this storm carries the Central Pacific basin code.
    ///
    /// CP storms are excluded from geometry emission but still listed in
    /// the manifest.
    pub fn is_central_pacific(&self) -> bool {
        self.basin_code
            .eq_ignore_ascii_case(constants::CENTRAL_PACIFIC_CODE)
    }

    /// Track path as (longitude, latitude) coordinate pairs
    pub fn track_coordinates(&self) -> Vec<[f64; 2]> {
        self.entries
            .iter()
            .map(|entry| [entry.longitude, entry.latitude])
            .collect()
    }

    /// Manifest listing record for this storm
    pub fn manifest_entry(&self) -> ManifestStorm {
        ManifestStorm {
            name: self.name.clone(),
            year: self.year.clone(),
            number: self.number.clone(),
        }
    }
}

/// Manifest listing record: identifies a storm without embedding geometry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManifestStorm {
    pub name: String,
    pub year: String,
    pub number: String,
}

// =============================================================================
// Classification
// =============================================================================

/// Discrete intensity category derived from peak sustained wind speed
///
/// Thresholds follow the Saffir-Simpson scale in knots, evaluated ascending
/// with first match winning. The open interval (136, 137) is a gap in the
/// source thresholds and maps to [`Classification::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Classification {
    TropicalDepression,
    TropicalStorm,
    Category1,
    Category2,
    Category3,
    Category4,
    Category5,
    Unknown,
}

impl Classification {
    /// Classify a peak wind speed in knots
    pub fn from_peak_wind(knots: f64) -> Self {
        if knots <= thresholds::TROPICAL_DEPRESSION_MAX {
            Classification::TropicalDepression
        } else if knots <= thresholds::TROPICAL_STORM_MAX {
            Classification::TropicalStorm
        } else if knots <= thresholds::CATEGORY_1_MAX {
            Classification::Category1
        } else if knots <= thresholds::CATEGORY_2_MAX {
            Classification::Category2
        } else if knots <= thresholds::CATEGORY_3_MAX {
            Classification::Category3
        } else if knots <= thresholds::CATEGORY_4_MAX {
            Classification::Category4
        } else if knots >= thresholds::CATEGORY_5_MIN {
            Classification::Category5
        } else {
            Classification::Unknown
        }
    }

    /// Short code written to summary feature properties
    pub fn code(&self) -> &'static str {
        match self {
            Classification::TropicalDepression => "TD",
            Classification::TropicalStorm => "TS",
            Classification::Category1 => "HU1",
            Classification::Category2 => "HU2",
            Classification::Category3 => "HU3",
            Classification::Category4 => "HU4",
            Classification::Category5 => "HU5",
            Classification::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_entry(wind_speed: f64) -> Entry {
        Entry {
            datetime_utc: "2023-08-15 18:00:00+00:00".to_string(),
            identifier_code: String::new(),
            system_status: "HU".to_string(),
            latitude: 26.1,
            longitude: -78.4,
            wind_speed,
            pressure_mb: 972.0,
        }
    }

    mod basin_tests {
        use super::*;

        #[test]
        fn test_basin_names() {
            assert_eq!(Basin::Atlantic.dir_name(), "atlantic");
            assert_eq!(Basin::Pacific.dir_name(), "pacific");
            assert_eq!(Basin::Atlantic.input_filename(), "atlantic.txt");
            assert_eq!(Basin::Pacific.input_filename(), "pacific.txt");
        }

        #[test]
        fn test_basin_from_str() {
            assert_eq!(Basin::from_str("atlantic").unwrap(), Basin::Atlantic);
            assert_eq!(Basin::from_str(" Pacific ").unwrap(), Basin::Pacific);
            assert!(Basin::from_str("indian").is_err());
        }

        #[test]
        fn test_basin_processing_order() {
            assert_eq!(Basin::ALL, [Basin::Atlantic, Basin::Pacific]);
        }
    }

    mod storm_tests {
        use super::*;

        #[test]
        fn test_filename_is_lowercased() {
            let storm = Storm::new("AL", "01", "2023", "TESTSTORM", 2);
            assert_eq!(storm.filename(), "2023-al-01-teststorm");
        }

        #[test]
        fn test_entry_count_validation() {
            let mut storm = Storm::new("AL", "01", "2023", "TESTSTORM", 2);
            assert!(storm.validate_entry_count().is_err());

            storm.push_entry(create_test_entry(40.0));
            storm.push_entry(create_test_entry(55.0));
            assert!(storm.validate_entry_count().is_ok());

            storm.push_entry(create_test_entry(60.0));
            let err = storm.validate_entry_count().unwrap_err();
            assert!(err.to_string().contains("2023-al-01-teststorm"));
        }

        #[test]
        fn test_central_pacific_detection() {
            assert!(Storm::new("CP", "03", "1994", "JOHN", 10).is_central_pacific());
            assert!(!Storm::new("EP", "03", "1994", "JOHN", 10).is_central_pacific());
            assert!(!Storm::new("AL", "03", "1994", "JOHN", 10).is_central_pacific());
        }

        #[test]
        fn test_track_coordinates_are_lon_lat() {
            let mut storm = Storm::new("AL", "01", "2023", "TESTSTORM", 1);
            storm.push_entry(create_test_entry(40.0));
            assert_eq!(storm.track_coordinates(), vec![[-78.4, 26.1]]);
        }

        #[test]
        fn test_manifest_entry_preserves_identity() {
            let storm = Storm::new("AL", "09", "2017", "IRMA", 66);
            let listing = storm.manifest_entry();
            assert_eq!(listing.name, "IRMA");
            assert_eq!(listing.year, "2017");
            assert_eq!(listing.number, "09");
        }
    }

    mod classification_tests {
        use super::*;

        #[test]
        fn test_threshold_boundaries() {
            assert_eq!(
                Classification::from_peak_wind(33.0),
                Classification::TropicalDepression
            );
            assert_eq!(
                Classification::from_peak_wind(34.0),
                Classification::TropicalStorm
            );
            assert_eq!(
                Classification::from_peak_wind(63.0),
                Classification::TropicalStorm
            );
            assert_eq!(
                Classification::from_peak_wind(64.0),
                Classification::Category1
            );
            assert_eq!(
                Classification::from_peak_wind(82.0),
                Classification::Category1
            );
            assert_eq!(
                Classification::from_peak_wind(95.0),
                Classification::Category2
            );
            assert_eq!(
                Classification::from_peak_wind(112.0),
                Classification::Category3
            );
            assert_eq!(
                Classification::from_peak_wind(136.0),
                Classification::Category4
            );
            assert_eq!(
                Classification::from_peak_wind(137.0),
                Classification::Category5
            );
            assert_eq!(
                Classification::from_peak_wind(150.0),
                Classification::Category5
            );
        }

        #[test]
        fn test_threshold_gap_maps_to_unknown() {
            // Unreachable with integral wind speeds; preserved as-specified.
            assert_eq!(
                Classification::from_peak_wind(136.5),
                Classification::Unknown
            );
        }

        #[test]
        fn test_classification_codes() {
            assert_eq!(Classification::TropicalDepression.code(), "TD");
            assert_eq!(Classification::TropicalStorm.code(), "TS");
            assert_eq!(Classification::Category1.code(), "HU1");
            assert_eq!(Classification::Category5.code(), "HU5");
            assert_eq!(Classification::Unknown.code(), "UNKNOWN");
            assert_eq!(format!("{}", Classification::Category3), "HU3");
        }
    }
}
