//! Test fixtures for year summary aggregation

use crate::app::models::{Entry, Storm};

// Test modules
mod aggregator_tests;

/// A storm whose peak wind lands in the given classification band
pub fn create_storm_with_winds(number: &str, name: &str, winds: &[f64]) -> Storm {
    let mut storm = Storm::new("AL", number, "2023", name, winds.len());
    for (i, wind) in winds.iter().enumerate() {
        storm.push_entry(Entry {
            datetime_utc: format!("2023-08-{:02} 00:00:00+00:00", i + 1),
            identifier_code: String::new(),
            system_status: "TS".to_string(),
            latitude: 20.0 + i as f64,
            longitude: -(70.0 + i as f64),
            wind_speed: *wind,
            pressure_mb: 1000.0,
        });
    }
    storm
}
