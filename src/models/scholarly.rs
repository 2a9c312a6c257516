//! Scholarly work records.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScholarlyListItem {
    pub uri: String,
    pub id: String,
    pub title: String,
    pub year: Option<String>,
    pub authors: Vec<Scholar>,
    pub source: Option<SourceRef>,
    pub publisher: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub mentions_person_count: usize,
    pub mentions_work_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScholarlyDetail {
    pub uri: String,
    pub title: String,
    pub year: Option<String>,
    pub authors: Vec<Scholar>,
    pub source: Option<SourceRef>,
    pub mentions_person: Vec<MentionedPerson>,
    pub mentions_work: Vec<MentionedWork>,
}

/// Author of a scholarly work.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Scholar {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceRef {
    pub id: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MentionedPerson {
    pub id: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MentionedWork {
    pub id: String,
    pub title: String,
}
