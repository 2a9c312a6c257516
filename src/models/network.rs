//! Graph views: the entity network and the ontology schema.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NetworkData {
    pub nodes: Vec<NetworkNode>,
    pub edges: Vec<NetworkEdge>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkNode {
    pub id: String,
    pub label: String,
    /// Display id of the node's class.
    pub group: String,
    /// Display id of the node's source.
    pub source: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkEdge {
    pub from: String,
    pub to: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OntologyGraph {
    pub nodes: Vec<OntologyNode>,
    pub edges: Vec<OntologyEdge>,
}

/// An ontology class. `id` is the full class IRI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OntologyNode {
    pub id: String,
    pub label: String,
    /// The class comment, shown as a tooltip.
    pub title: Option<String>,
    pub group: String,
}

/// An object property drawn from its domain to its range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OntologyEdge {
    pub from: String,
    pub to: String,
    pub label: String,
    pub arrows: String,
    pub font: EdgeFont,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeFont {
    pub align: String,
}

impl Default for EdgeFont {
    fn default() -> Self {
        Self {
            align: "middle".to_string(),
        }
    }
}

/// Drift between the declared vocabulary and the instance data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OntologyAudit {
    pub classes: AuditSection,
    pub properties: AuditSection,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AuditSection {
    pub defined_count: usize,
    pub actual_count: usize,
    /// Declared but never used, sorted.
    pub unused: Vec<String>,
    /// Used but never declared, sorted.
    pub undefined: Vec<String>,
}
