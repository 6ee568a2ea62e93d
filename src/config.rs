//! Configuration management and validation.
//!
//! Provides the runtime configuration assembled from CLI arguments:
//! input and output locations, the basins to process, and output
//! formatting.

use crate::app::models::Basin;
use crate::constants::MANIFEST_FILENAME;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Runtime configuration for a processing run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory containing the per-basin track files
    pub input_path: PathBuf,

    /// Root directory for generated GeoJSON artifacts
    pub output_path: PathBuf,

    /// Basins to process, in order
    pub basins: Vec<Basin>,

    /// Pretty-print emitted JSON
    pub pretty: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from("."),
            output_path: PathBuf::from("output"),
            basins: Basin::ALL.to_vec(),
            pretty: true,
        }
    }
}

impl Config {
    /// Path of a basin's input track file
    pub fn basin_input_path(&self, basin: Basin) -> PathBuf {
        self.input_path.join(basin.input_filename())
    }

    /// Root output directory for a basin's per-storm files
    pub fn basin_output_dir(&self, basin: Basin) -> PathBuf {
        self.output_path.join(basin.dir_name())
    }

    /// Path of the manifest index file
    pub fn manifest_path(&self) -> PathBuf {
        self.output_path.join(MANIFEST_FILENAME)
    }

    /// Validate configuration consistency before processing starts
    pub fn validate(&self) -> Result<()> {
        if self.basins.is_empty() {
            return Err(Error::configuration(
                "At least one basin must be selected".to_string(),
            ));
        }

        validate_input_dir(&self.input_path)?;

        for basin in &self.basins {
            let track_file = self.basin_input_path(*basin);
            if !track_file.is_file() {
                return Err(Error::configuration(format!(
                    "Track file for basin '{}' not found: {}",
                    basin,
                    track_file.display()
                )));
            }
        }

        Ok(())
    }

    /// Create the output root directory if it does not exist
    pub fn ensure_output_directory(&self) -> Result<()> {
        if !self.output_path.exists() {
            std::fs::create_dir_all(&self.output_path).map_err(|e| {
                Error::io(
                    format!(
                        "Failed to create output directory '{}'",
                        self.output_path.display()
                    ),
                    e,
                )
            })?;
            debug!("Created output directory: {}", self.output_path.display());
        }
        Ok(())
    }
}

fn validate_input_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(Error::configuration(format!(
            "Input path does not exist: {}",
            path.display()
        )));
    }
    if !path.is_dir() {
        return Err(Error::configuration(format!(
            "Input path is not a directory: {}",
            path.display()
        )));
    }
    Ok(())
}
