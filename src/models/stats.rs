use serde::{Deserialize, Serialize};

/// Entity counts per kind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub persons: usize,
    pub works: usize,
    pub scholarly: usize,
    pub places: usize,
    pub subjects: usize,
    pub languages: usize,
    pub sources: usize,
}
