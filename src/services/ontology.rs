//! Ontology schema graph and schema/data drift audit.

use std::collections::{BTreeSet, HashSet};

use crate::context::Context;
use crate::di::FromContext;
use crate::error::AppError;
use crate::models::{AuditSection, EdgeFont, OntologyAudit, OntologyEdge, OntologyGraph, OntologyNode};
use crate::repositories::{ClassRow, OntologyRepository, PropertyRow};
use crate::vocab::local_id;

#[derive(FromContext, Clone)]
pub struct OntologyService {
    ontology: OntologyRepository,
}

impl OntologyService {
    /// Classes as nodes, object properties as domain-to-range edges.
    pub async fn graph(&self) -> Result<OntologyGraph, AppError> {
        let (classes, properties) =
            tokio::try_join!(self.ontology.classes(), self.ontology.object_properties())?;
        Ok(schema_graph(classes, properties))
    }

    /// Compares the declared vocabulary with what the data actually uses.
    pub async fn audit(&self) -> Result<OntologyAudit, AppError> {
        let (classes, defined_properties, used_classes, used_properties) = tokio::try_join!(
            self.ontology.classes(),
            self.ontology.defined_properties(),
            self.ontology.used_classes(),
            self.ontology.used_properties(),
        )?;

        let defined_classes: BTreeSet<String> = classes.into_iter().map(|c| c.uri).collect();
        Ok(OntologyAudit {
            classes: section(&defined_classes, &used_classes),
            properties: section(&defined_properties, &used_properties),
        })
    }
}

fn schema_graph(classes: Vec<ClassRow>, properties: Vec<PropertyRow>) -> OntologyGraph {
    let mut known = HashSet::new();
    let mut graph = OntologyGraph::default();

    for class in classes {
        if !known.insert(class.uri.clone()) {
            continue;
        }
        graph.nodes.push(OntologyNode {
            label: class
                .label
                .unwrap_or_else(|| local_id(&class.uri).to_string()),
            title: class.comment,
            group: "Class".to_string(),
            id: class.uri,
        });
    }

    let mut seen = HashSet::new();
    for property in properties {
        let (Some(domain), Some(range)) = (property.domain, property.range) else {
            continue;
        };
        if !known.contains(&domain) || !known.contains(&range) {
            continue;
        }
        if !seen.insert((property.uri.clone(), domain.clone(), range.clone())) {
            continue;
        }
        graph.edges.push(OntologyEdge {
            label: property
                .label
                .unwrap_or_else(|| local_id(&property.uri).to_string()),
            from: domain,
            to: range,
            arrows: "to".to_string(),
            font: EdgeFont::default(),
        });
    }

    graph
}

fn section(defined: &BTreeSet<String>, used: &BTreeSet<String>) -> AuditSection {
    AuditSection {
        defined_count: defined.len(),
        actual_count: used.len(),
        unused: defined.difference(used).cloned().collect(),
        undefined: used.difference(defined).cloned().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn class(uri: &str) -> ClassRow {
        ClassRow {
            uri: uri.to_string(),
            label: None,
            comment: Some(format!("{uri} class")),
        }
    }

    fn property(uri: &str, domain: Option<&str>, range: Option<&str>) -> PropertyRow {
        PropertyRow {
            uri: uri.to_string(),
            label: None,
            domain: domain.map(str::to_string),
            range: range.map(str::to_string),
        }
    }

    #[test]
    fn test_edges_need_known_domain_and_range() {
        let classes = vec![class("o#Person"), class("o#Work")];
        let properties = vec![
            property("o#writtenBy", Some("o#Work"), Some("o#Person")),
            property("o#writtenBy", Some("o#Work"), Some("o#Person")),
            property("o#livedIn", Some("o#Person"), Some("o#Place")),
            property("o#orphan", None, Some("o#Person")),
        ];

        let graph = schema_graph(classes, properties);
        assert_eq!(graph.nodes.len(), 2);
        assert_eq!(graph.nodes[0].label, "Person");
        assert_eq!(graph.nodes[0].group, "Class");
        assert_eq!(graph.edges.len(), 1);
        assert_eq!(graph.edges[0].label, "writtenBy");
        assert_eq!(graph.edges[0].arrows, "to");
    }

    #[test]
    fn test_audit_section_differences() {
        let defined: BTreeSet<String> = ["a", "b", "c"].iter().map(|s| s.to_string()).collect();
        let used: BTreeSet<String> = ["b", "c", "d"].iter().map(|s| s.to_string()).collect();

        let s = section(&defined, &used);
        assert_eq!(s.defined_count, 3);
        assert_eq!(s.actual_count, 3);
        assert_eq!(s.unused, vec!["a".to_string()]);
        assert_eq!(s.undefined, vec!["d".to_string()]);
    }
}
