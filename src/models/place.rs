//! Place records.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceListItem {
    pub id: String,
    pub uri: String,
    pub label: String,
    pub lat: Option<String>,
    pub long: Option<String>,
    /// Distinct persons related to the place.
    pub person_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceDetail {
    pub id: String,
    pub uri: String,
    pub label: String,
    pub lat: Option<String>,
    pub long: Option<String>,
    pub people: Vec<PersonAtPlace>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonAtPlace {
    pub id: String,
    pub uri: String,
    pub label: String,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}
