//! Manifest index construction
//!
//! The manifest lists every processed storm per basin without embedding
//! geometry, so consumers can discover available storms cheaply. Storms
//! excluded from geometry emission (Central Pacific) still appear here.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::app::models::{ManifestStorm, Storm};

/// Index of all storms processed in a run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    /// UTC creation timestamp in ISO-8601 format
    #[serde(rename = "created-at")]
    pub created_at: String,

    /// Atlantic storms in processing order
    #[serde(rename = "atlantic-storms")]
    pub atlantic_storms: Vec<ManifestStorm>,

    /// Pacific storms in processing order
    #[serde(rename = "pacific-storms")]
    pub pacific_storms: Vec<ManifestStorm>,
}

impl Manifest {
    /// Build a manifest from the completed storm lists, stamped with the
    /// current UTC time
    pub fn build(atlantic: &[Storm], pacific: &[Storm]) -> Self {
        Self {
            created_at: Utc::now().format("%Y-%m-%dT%H:%M:%S%.6f").to_string(),
            atlantic_storms: atlantic.iter().map(Storm::manifest_entry).collect(),
            pacific_storms: pacific.iter().map(Storm::manifest_entry).collect(),
        }
    }
}
