use serde::{Deserialize, Serialize};

/// A provenance tag and the number of entities carrying it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceItem {
    pub id: String,
    pub label: String,
    pub description: String,
    pub count: usize,
}
