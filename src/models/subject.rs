//! Subject and language records.
//!
//! Both kinds are plain vocabularies that works point at, so they share the
//! list shape and the work reference.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubjectListItem {
    pub id: String,
    pub uri: String,
    pub label: String,
    /// Distinct works on the subject.
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubjectDetail {
    pub id: String,
    pub uri: String,
    pub label: String,
    pub description: Option<String>,
    pub works: Vec<WorkRef>,
}

/// Languages list exactly like subjects.
pub type LanguageListItem = SubjectListItem;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageDetail {
    pub id: String,
    pub uri: String,
    pub label: String,
    pub works: Vec<WorkRef>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkRef {
    pub id: String,
    pub uri: String,
    pub title: String,
}
