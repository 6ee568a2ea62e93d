//! Typed GeoJSON structures and storm-to-feature assembly
//!
//! Geometries are an internally tagged enum so the `type` member drives
//! deserialization when per-storm files are read back by the summary pass.
//! Feature properties stay dynamic (`serde_json::Map`) because point and
//! line features carry different property sets within one collection.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

use crate::app::models::{Entry, Storm};
use crate::constants::properties;

/// GeoJSON geometry, tagged by its `type` member
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Geometry {
    Point { coordinates: [f64; 2] },
    LineString { coordinates: Vec<[f64; 2]> },
}

impl Geometry {
    /// Whether this geometry is a LineString
    pub fn is_line_string(&self) -> bool {
        matches!(self, Geometry::LineString { .. })
    }
}

/// A GeoJSON feature with dynamic properties
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    #[serde(rename = "type")]
    pub feature_type: String,
    pub geometry: Geometry,
    #[serde(default)]
    pub properties: Map<String, Value>,
}

impl Feature {
    /// Create a feature with the standard `"Feature"` type tag
    pub fn new(geometry: Geometry, properties: Map<String, Value>) -> Self {
        Self {
            feature_type: "Feature".to_string(),
            geometry,
            properties,
        }
    }
}

/// A GeoJSON feature collection, optionally carrying top-level properties
///
/// Per-storm files carry storm identity properties at the top level;
/// per-year summary files have no top-level properties member at all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureCollection {
    #[serde(rename = "type")]
    pub collection_type: String,
    pub features: Vec<Feature>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<Map<String, Value>>,
}

impl FeatureCollection {
    /// Create a collection with the standard `"FeatureCollection"` type tag
    pub fn new(features: Vec<Feature>, properties: Option<Map<String, Value>>) -> Self {
        Self {
            collection_type: "FeatureCollection".to_string(),
            features,
            properties,
        }
    }

    /// Features whose geometry is a LineString
    pub fn line_features(&self) -> Vec<&Feature> {
        self.features
            .iter()
            .filter(|f| f.geometry.is_line_string())
            .collect()
    }
}

/// Build the point feature for one track entry
pub fn point_feature(entry: &Entry) -> Feature {
    let mut props = Map::new();
    props.insert(
        properties::ID_CODE.to_string(),
        Value::String(entry.identifier_code.clone()),
    );
    props.insert(
        properties::STATUS.to_string(),
        Value::String(entry.system_status.clone()),
    );
    props.insert(properties::WIND_SPEED.to_string(), json_number(entry.wind_speed));
    props.insert(
        properties::DATETIME_UTC.to_string(),
        Value::String(entry.datetime_utc.clone()),
    );
    props.insert(properties::PRESSURE_MB.to_string(), json_number(entry.pressure_mb));

    Feature::new(
        Geometry::Point {
            coordinates: [entry.longitude, entry.latitude],
        },
        props,
    )
}

/// Build the LineString feature tracing a storm's path
pub fn track_line_feature(storm: &Storm) -> Feature {
    Feature::new(
        Geometry::LineString {
            coordinates: storm.track_coordinates(),
        },
        Map::new(),
    )
}

/// Assemble the per-storm feature collection: one point per entry followed
/// by the track line, with storm identity as top-level properties
pub fn storm_collection(storm: &Storm) -> FeatureCollection {
    let mut features: Vec<Feature> = storm.entries.iter().map(point_feature).collect();
    features.push(track_line_feature(storm));

    let mut props = Map::new();
    props.insert(
        properties::NAME.to_string(),
        Value::String(storm.name.clone()),
    );
    props.insert(
        properties::BASIN.to_string(),
        Value::String(storm.basin_code.clone()),
    );
    props.insert(
        properties::YEAR.to_string(),
        Value::String(storm.year.clone()),
    );
    props.insert(
        properties::NUMBER.to_string(),
        Value::String(storm.number.clone()),
    );

    FeatureCollection::new(features, Some(props))
}

pub(crate) fn json_number(value: f64) -> Value {
    Number::from_f64(value).map(Value::Number).unwrap_or(Value::Null)
}
