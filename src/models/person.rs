//! Person records.

use serde::{Deserialize, Serialize};

/// Row of the person listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonListItem {
    pub id: String,
    pub uri: String,
    pub label: String,
    /// Distinct authored works.
    pub work_count: usize,
    /// Distinct scholarly works about the person.
    pub mention_count: usize,
    /// Sorted, comma-joined place labels, `"-"` when none.
    pub places: String,
    /// Sorted, comma-joined time spans, `"-"` when none.
    pub times: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonDetail {
    pub id: String,
    pub uri: String,
    pub label: String,
    /// Label of the person's source.
    pub source: Option<String>,
    pub authorities: Vec<String>,
    pub works: Vec<PersonWork>,
    pub scholarly: Vec<ScholarlyMention>,
    pub places: Vec<PersonPlace>,
    pub times: Vec<PersonTime>,
}

/// Work authored by a person.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonWork {
    pub id: String,
    pub uri: String,
    pub title: String,
}

/// Scholarly work about a person or work.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScholarlyMention {
    pub id: String,
    pub uri: String,
    pub title: String,
    pub year: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonPlace {
    pub place_id: String,
    pub place_uri: String,
    pub label: String,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonTime {
    #[serde(rename = "type")]
    pub kind: String,
    pub start: Option<String>,
    pub end: Option<String>,
}
