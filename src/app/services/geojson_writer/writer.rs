//! Per-storm GeoJSON and manifest file writing
//!
//! Owns the output directory layout: `{root}/{basin}/{year}/{id}.geojson`
//! for storms and `{root}/manifest.json` for the index.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info};

use super::features::storm_collection;
use super::manifest::Manifest;
use crate::app::models::{Basin, Storm};
use crate::constants::GEOJSON_EXTENSION;
use crate::{Error, Result};

/// Writer for per-storm GeoJSON artifacts and the manifest index
#[derive(Debug)]
pub struct GeojsonWriter {
    output_root: PathBuf,
    pretty: bool,
}

impl GeojsonWriter {
    /// Create a writer rooted at the given output directory
    pub fn new(output_root: impl Into<PathBuf>, pretty: bool) -> Self {
        Self {
            output_root: output_root.into(),
            pretty,
        }
    }

    /// Write one storm's feature collection under its basin/year directory.
    ///
    /// Returns the written path, or `None` for Central Pacific storms,
    /// which are excluded from geometry emission (they remain listed in
    /// the manifest).
    pub fn write_storm(&self, basin: Basin, storm: &Storm) -> Result<Option<PathBuf>> {
        if storm.is_central_pacific() {
            debug!(
                "Skipping geometry emission for Central Pacific storm {}",
                storm.filename()
            );
            return Ok(None);
        }

        let year_dir = self.output_root.join(basin.dir_name()).join(&storm.year);
        std::fs::create_dir_all(&year_dir).map_err(|e| {
            Error::io(
                format!("Failed to create output directory '{}'", year_dir.display()),
                e,
            )
        })?;

        let path = year_dir.join(format!("{}.{}", storm.filename(), GEOJSON_EXTENSION));
        self.write_json(&path, &storm_collection(storm))?;

        debug!("Wrote storm file: {}", path.display());
        Ok(Some(path))
    }

    /// Write the manifest index at the output root
    pub fn write_manifest(&self, manifest: &Manifest) -> Result<PathBuf> {
        let path = self.output_root.join(crate::constants::MANIFEST_FILENAME);
        self.write_json(&path, manifest)?;

        info!("Wrote manifest: {}", path.display());
        Ok(path)
    }

    fn write_json<T: Serialize>(&self, path: &Path, value: &T) -> Result<()> {
        let json = if self.pretty {
            serde_json::to_string_pretty(value)
        } else {
            serde_json::to_string(value)
        }
        .map_err(|e| Error::json(format!("Failed to serialize '{}'", path.display()), e))?;

        std::fs::write(path, json).map_err(|e| {
            Error::io(format!("Failed to write '{}'", path.display()), e)
        })
    }
}
