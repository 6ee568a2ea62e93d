//! Test fixtures for GeoJSON emission testing

use crate::app::models::{Entry, Storm};


/// A storm with two entries whose counts match its declaration
pub fn create_test_storm() -> Storm {
    let mut storm = Storm::new("AL", "01", "2023", "TESTSTORM", 2);
    storm.push_entry(Entry {
        datetime_utc: "2023-08-15 18:00:00+00:00".to_string(),
        identifier_code: String::new(),
        system_status: "TS".to_string(),
        latitude: 26.1,
        longitude: -78.4,
        wind_speed: 45.0,
        pressure_mb: 1002.0,
    });
    storm.push_entry(Entry {
        datetime_utc: "2023-08-16 00:00:00+00:00".to_string(),
        identifier_code: "L".to_string(),
        system_status: "HU".to_string(),
        latitude: 26.8,
        longitude: -79.1,
        wind_speed: 70.0,
        pressure_mb: 985.0,
    });
    storm
}
