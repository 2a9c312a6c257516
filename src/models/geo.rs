//! GeoJSON output.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureCollection {
    #[serde(rename = "type")]
    pub kind: String,
    pub features: Vec<Feature>,
}

impl FeatureCollection {
    pub fn new(features: Vec<Feature>) -> Self {
        Self {
            kind: "FeatureCollection".to_string(),
            features,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    #[serde(rename = "type")]
    pub kind: String,
    pub geometry: Point,
    pub properties: FeatureProperties,
}

impl Feature {
    pub fn new(geometry: Point, properties: FeatureProperties) -> Self {
        Self {
            kind: "Feature".to_string(),
            geometry,
            properties,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    #[serde(rename = "type")]
    pub kind: String,
    /// `[longitude, latitude]`
    pub coordinates: [f64; 2],
}

impl Point {
    pub fn new(lat: f64, long: f64) -> Self {
        Self {
            kind: "Point".to_string(),
            coordinates: [long, lat],
        }
    }
}

/// A person at a place during a span of years.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureProperties {
    pub person_id: String,
    pub person_label: String,
    pub place_label: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub start: Option<i64>,
    pub end: Option<i64>,
}
