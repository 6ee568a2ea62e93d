//! Tests for the read-back aggregation and classification pass

use serde_json::{Map, Value};
use tempfile::TempDir;

use super::super::aggregator::{peak_wind_speed, YearAggregator};
use super::create_storm_with_winds;
use crate::app::models::Basin;
use crate::app::services::geojson_writer::features::{Feature, FeatureCollection, Geometry};
use crate::app::services::geojson_writer::GeojsonWriter;
use crate::Error;

fn wind_feature(wind: Option<f64>) -> Feature {
    let mut props = Map::new();
    if let Some(w) = wind {
        props.insert("wind-speed".to_string(), Value::from(w));
    }
    Feature::new(
        Geometry::Point {
            coordinates: [0.0, 0.0],
        },
        props,
    )
}

#[test]
fn test_peak_wind_excludes_missing_observations() {
    let collection = FeatureCollection::new(
        vec![
            wind_feature(Some(40.0)),
            wind_feature(None),
            wind_feature(Some(70.0)),
        ],
        None,
    );
    assert_eq!(peak_wind_speed(&collection), Some(70.0));
}

#[test]
fn test_peak_wind_empty_candidate_set() {
    let collection = FeatureCollection::new(vec![wind_feature(None)], None);
    assert_eq!(peak_wind_speed(&collection), None);
}

#[test]
fn test_summarize_basin_end_to_end() {
    let temp_dir = TempDir::new().unwrap();
    let writer = GeojsonWriter::new(temp_dir.path(), true);

    // Two storms in 2023: one tropical storm, one category 5
    let ts = create_storm_with_winds("01", "ALPHA", &[30.0, 45.0, 60.0]);
    let hu5 = create_storm_with_winds("02", "BRAVO", &[80.0, 150.0, 120.0]);
    writer.write_storm(Basin::Atlantic, &ts).unwrap();
    writer.write_storm(Basin::Atlantic, &hu5).unwrap();

    let aggregator = YearAggregator::new(temp_dir.path(), true);
    let stats = aggregator.summarize_basin(Basin::Atlantic).unwrap();
    assert_eq!(stats.years_summarized, 1);
    assert_eq!(stats.storms_classified, 2);

    let summary_path = temp_dir
        .path()
        .join("atlantic")
        .join("2023")
        .join("2023_atlantic_summary.geojson");
    let summary: FeatureCollection =
        serde_json::from_str(&std::fs::read_to_string(&summary_path).unwrap()).unwrap();

    // Line features only, sorted by filename: alpha before bravo
    assert_eq!(summary.features.len(), 2);
    assert!(summary.properties.is_none());
    assert!(summary.features.iter().all(|f| f.geometry.is_line_string()));

    let alpha = &summary.features[0];
    assert_eq!(alpha.properties["name"], Value::from("ALPHA"));
    assert_eq!(alpha.properties["classification"], Value::from("TS"));
    assert_eq!(alpha.properties["max-wind-speed-knots"], Value::from(60.0));

    let bravo = &summary.features[1];
    assert_eq!(bravo.properties["classification"], Value::from("HU5"));
    assert_eq!(bravo.properties["max-wind-speed-knots"], Value::from(150.0));
}

#[test]
fn test_rerun_ignores_existing_summary_files() {
    let temp_dir = TempDir::new().unwrap();
    let writer = GeojsonWriter::new(temp_dir.path(), true);
    let storm = create_storm_with_winds("01", "ALPHA", &[45.0]);
    writer.write_storm(Basin::Atlantic, &storm).unwrap();

    let aggregator = YearAggregator::new(temp_dir.path(), true);
    aggregator.summarize_basin(Basin::Atlantic).unwrap();
    let stats = aggregator.summarize_basin(Basin::Atlantic).unwrap();

    // Second pass still sees exactly one storm file
    assert_eq!(stats.storms_classified, 1);
}

#[test]
fn test_missing_basin_directory_is_empty_summary() {
    let temp_dir = TempDir::new().unwrap();
    let aggregator = YearAggregator::new(temp_dir.path(), true);
    let stats = aggregator.summarize_basin(Basin::Pacific).unwrap();
    assert_eq!(stats.years_summarized, 0);
    assert_eq!(stats.storms_classified, 0);
}

fn write_raw_storm_file(dir: &std::path::Path, name: &str, collection: &FeatureCollection) {
    let year_dir = dir.join("atlantic").join("2023");
    std::fs::create_dir_all(&year_dir).unwrap();
    std::fs::write(
        year_dir.join(name),
        serde_json::to_string_pretty(collection).unwrap(),
    )
    .unwrap();
}

fn storm_props() -> Map<String, Value> {
    let mut props = Map::new();
    props.insert("name".to_string(), Value::from("ALPHA"));
    props.insert("basin".to_string(), Value::from("AL"));
    props.insert("year".to_string(), Value::from("2023"));
    props.insert("number".to_string(), Value::from("01"));
    props
}

fn line_feature() -> Feature {
    Feature::new(
        Geometry::LineString {
            coordinates: vec![[0.0, 0.0], [1.0, 1.0]],
        },
        Map::new(),
    )
}

#[test]
fn test_duplicate_line_feature_is_fatal() {
    let temp_dir = TempDir::new().unwrap();
    let collection = FeatureCollection::new(
        vec![wind_feature(Some(50.0)), line_feature(), line_feature()],
        Some(storm_props()),
    );
    write_raw_storm_file(temp_dir.path(), "2023-al-01-alpha.geojson", &collection);

    let aggregator = YearAggregator::new(temp_dir.path(), true);
    let err = aggregator.summarize_basin(Basin::Atlantic).unwrap_err();
    assert!(matches!(err, Error::Validation { .. }));
    assert!(err.to_string().contains("2023-al-01-alpha.geojson"));
}

#[test]
fn test_missing_line_feature_is_fatal() {
    let temp_dir = TempDir::new().unwrap();
    let collection =
        FeatureCollection::new(vec![wind_feature(Some(50.0))], Some(storm_props()));
    write_raw_storm_file(temp_dir.path(), "2023-al-01-alpha.geojson", &collection);

    let aggregator = YearAggregator::new(temp_dir.path(), true);
    assert!(matches!(
        aggregator.summarize_basin(Basin::Atlantic),
        Err(Error::Validation { .. })
    ));
}

#[test]
fn test_missing_storm_properties_is_fatal() {
    let temp_dir = TempDir::new().unwrap();
    let collection =
        FeatureCollection::new(vec![wind_feature(Some(50.0)), line_feature()], None);
    write_raw_storm_file(temp_dir.path(), "2023-al-01-alpha.geojson", &collection);

    let aggregator = YearAggregator::new(temp_dir.path(), true);
    assert!(matches!(
        aggregator.summarize_basin(Basin::Atlantic),
        Err(Error::Validation { .. })
    ));
}

#[test]
fn test_no_wind_observations_is_fatal() {
    let temp_dir = TempDir::new().unwrap();
    let collection =
        FeatureCollection::new(vec![line_feature()], Some(storm_props()));
    write_raw_storm_file(temp_dir.path(), "2023-al-01-alpha.geojson", &collection);

    let aggregator = YearAggregator::new(temp_dir.path(), true);
    let err = aggregator.summarize_basin(Basin::Atlantic).unwrap_err();
    assert!(err.to_string().contains("wind-speed"));
}
