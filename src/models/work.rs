//! Work records.

use serde::{Deserialize, Serialize};

use super::ScholarlyMention;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkListItem {
    pub id: String,
    pub uri: String,
    pub title: String,
    /// Sorted, comma-joined author labels, `"-"` when none.
    pub authors: String,
    pub mention_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkDetail {
    pub id: String,
    pub uri: String,
    pub title: String,
    pub authors: Vec<WorkAuthor>,
    pub subjects: Vec<String>,
    pub languages: Vec<String>,
    pub scholarly_mentions: Vec<ScholarlyMention>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkAuthor {
    pub id: String,
    pub uri: String,
    pub label: String,
}
