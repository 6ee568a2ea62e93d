//! Year aggregation: read-back, classification, and summary emission
//!
//! Walks `{root}/{basin}/{year}` directories, derives peak wind speed and
//! classification for each per-storm file, and writes one
//! `{year}_{basin}_summary.geojson` per year directory containing only the
//! annotated track lines.

use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::app::models::{Basin, Classification};
use crate::app::services::geojson_writer::features::{json_number, Feature, FeatureCollection};
use crate::constants::{properties, GEOJSON_EXTENSION, SUMMARY_FILE_SUFFIX};
use crate::{Error, Result};

/// Statistics for a summary pass
#[derive(Debug, Clone, Default)]
pub struct SummaryStats {
    /// Number of (basin, year) summary files written
    pub years_summarized: usize,

    /// Number of storms classified across all years
    pub storms_classified: usize,
}

/// Aggregator producing per-year summary collections from per-storm files
#[derive(Debug)]
pub struct YearAggregator {
    output_root: PathBuf,
    pretty: bool,
}

impl YearAggregator {
    /// Create an aggregator over the given output root
    pub fn new(output_root: impl Into<PathBuf>, pretty: bool) -> Self {
        Self {
            output_root: output_root.into(),
            pretty,
        }
    }

    /// Summarize every year directory under one basin
    pub fn summarize_basin(&self, basin: Basin) -> Result<SummaryStats> {
        let basin_dir = self.output_root.join(basin.dir_name());
        let mut stats = SummaryStats::default();

        if !basin_dir.is_dir() {
            warn!(
                "No output directory for {} basin at {}, nothing to summarize",
                basin,
                basin_dir.display()
            );
            return Ok(stats);
        }

        for year_dir in discover_year_dirs(&basin_dir)? {
            let storms = self.summarize_year(basin, &year_dir)?;
            stats.years_summarized += 1;
            stats.storms_classified += storms;
        }

        info!(
            "Summarized {} years ({} storms) for {} basin",
            stats.years_summarized, stats.storms_classified, basin
        );
        Ok(stats)
    }

    /// Build and write the summary collection for one year directory
    fn summarize_year(&self, basin: Basin, year_dir: &Path) -> Result<usize> {
        let year = year_dir
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| {
                Error::validation(format!(
                    "year directory has no readable name: {}",
                    year_dir.display()
                ))
            })?;

        let storm_files = discover_storm_files(year_dir);
        debug!(
            "Summarizing {} {}: {} storm files",
            basin,
            year,
            storm_files.len()
        );

        let mut features_for_year = Vec::with_capacity(storm_files.len());
        for file in &storm_files {
            features_for_year.push(self.summarize_storm_file(file)?);
        }

        let summary_name = format!(
            "{}_{}{}.{}",
            year,
            basin.dir_name(),
            SUMMARY_FILE_SUFFIX,
            GEOJSON_EXTENSION
        );
        let summary_path = year_dir.join(summary_name);
        let collection = FeatureCollection::new(features_for_year, None);

        let json = if self.pretty {
            serde_json::to_string_pretty(&collection)
        } else {
            serde_json::to_string(&collection)
        }
        .map_err(|e| Error::json(format!("Failed to serialize '{}'", summary_path.display()), e))?;

        std::fs::write(&summary_path, json).map_err(|e| {
            Error::io(format!("Failed to write '{}'", summary_path.display()), e)
        })?;

        debug!("Wrote summary file: {}", summary_path.display());
        Ok(storm_files.len())
    }

    /// Read one per-storm file back and derive its annotated track line
    fn summarize_storm_file(&self, path: &Path) -> Result<Feature> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::io(format!("Failed to read storm file '{}'", path.display()), e)
        })?;

        let collection: FeatureCollection = serde_json::from_str(&content).map_err(|e| {
            Error::json(format!("Failed to parse storm file '{}'", path.display()), e)
        })?;

        let mut props = collection.properties.clone().ok_or_else(|| {
            Error::validation(format!(
                "storm file '{}' has no top-level properties",
                path.display()
            ))
        })?;

        let line_features = collection.line_features();
        if line_features.len() != 1 {
            return Err(Error::validation(format!(
                "storm file '{}' must contain exactly one LineString feature, found {}",
                path.display(),
                line_features.len()
            )));
        }
        let track_line = line_features[0].geometry.clone();

        let peak = peak_wind_speed(&collection).ok_or_else(|| {
            Error::validation(format!(
                "storm file '{}' carries no wind-speed observations",
                path.display()
            ))
        })?;

        let classification = Classification::from_peak_wind(peak);
        if classification == Classification::Unknown {
            // Peak fell into the (136, 137) threshold gap; surfaced, not patched
            warn!(
                "Peak wind {} kt in '{}' has no classification band",
                peak,
                path.display()
            );
        }

        props.insert(
            properties::MAX_WIND_SPEED_KNOTS.to_string(),
            json_number(peak),
        );
        props.insert(
            properties::CLASSIFICATION.to_string(),
            Value::String(classification.code().to_string()),
        );

        Ok(Feature::new(track_line, props))
    }
}

/// Peak wind speed across all features carrying a `wind-speed` property.
///
/// Presence of the property marks an observation; features without it
/// (including the track line itself) are excluded from the candidate set.
/// Returns `None` when no feature carries an observation.
pub fn peak_wind_speed(collection: &FeatureCollection) -> Option<f64> {
    collection
        .features
        .iter()
        .filter_map(|f| f.properties.get(properties::WIND_SPEED))
        .filter_map(Value::as_f64)
        .fold(None, |max: Option<f64>, v| {
            Some(max.map_or(v, |m| m.max(v)))
        })
}

/// Year subdirectories of a basin directory, sorted by name
fn discover_year_dirs(basin_dir: &Path) -> Result<Vec<PathBuf>> {
    let mut years = Vec::new();
    for entry in std::fs::read_dir(basin_dir).map_err(|e| {
        Error::io(
            format!("Failed to read basin directory '{}'", basin_dir.display()),
            e,
        )
    })? {
        let entry = entry.map_err(|e| {
            Error::io(
                format!("Failed to read entry in '{}'", basin_dir.display()),
                e,
            )
        })?;
        if entry.path().is_dir() {
            years.push(entry.path());
        }
    }
    years.sort();
    Ok(years)
}

/// Per-storm files in one year directory, sorted for deterministic output.
/// Previously written summary files are ignored.
fn discover_storm_files(year_dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(year_dir)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
        .map(|e| e.into_path())
        .filter(|path| {
            path.is_file()
                && path.extension().and_then(|s| s.to_str()) == Some(GEOJSON_EXTENSION)
                && !path
                    .file_stem()
                    .and_then(|s| s.to_str())
                    .is_some_and(|stem| stem.ends_with(SUMMARY_FILE_SUFFIX))
        })
        .collect();
    files.sort();
    files
}
