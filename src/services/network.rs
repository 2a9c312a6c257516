//! Entity network projection.
//!
//! Nodes are filtered by provenance; edges never are. An edge survives only
//! when both of its endpoints are surviving nodes, so filtering the nodes
//! filters the edges with them.

use std::collections::HashSet;

use crate::context::Context;
use crate::di::FromContext;
use crate::error::AppError;
use crate::filter::SourceFilter;
use crate::models::{NetworkData, NetworkEdge, NetworkNode};
use crate::repositories::{EdgeRow, NetworkRepository, NodeRow};
use crate::vocab::local_id;

#[derive(FromContext, Clone)]
pub struct NetworkService {
    network: NetworkRepository,
}

impl NetworkService {
    pub async fn network(&self, filter: &SourceFilter) -> Result<NetworkData, AppError> {
        let (nodes, direct, places) = tokio::try_join!(
            self.network.nodes(filter),
            self.network.direct_edges(),
            self.network.place_edges(),
        )?;

        let data = project(nodes, direct.into_iter().chain(places));
        tracing::debug!(
            nodes = data.nodes.len(),
            edges = data.edges.len(),
            "projected entity network"
        );
        Ok(data)
    }
}

/// Builds the node set, then keeps the candidate edges whose endpoints are
/// both in it. Parallel edges are kept.
fn project(nodes: Vec<NodeRow>, candidates: impl IntoIterator<Item = EdgeRow>) -> NetworkData {
    let mut ids = HashSet::new();
    let mut network = NetworkData::default();

    for row in nodes {
        let id = local_id(&row.uri).to_string();
        if !ids.insert(id.clone()) {
            continue;
        }
        network.nodes.push(NetworkNode {
            label: row.label.unwrap_or_else(|| id.clone()),
            group: local_id(&row.kind).to_string(),
            source: row.source.as_deref().map(|s| local_id(s).to_string()),
            id,
        });
    }

    network.edges = candidates
        .into_iter()
        .map(|e| NetworkEdge {
            from: local_id(&e.from).to_string(),
            to: local_id(&e.to).to_string(),
        })
        .filter(|e| ids.contains(&e.from) && ids.contains(&e.to))
        .collect();

    network
}

#[cfg(test)]
mod tests {
    use super::*;

    const NS: &str = "http://jewish_philosophy.org/ontology#";

    fn node(id: &str, kind: &str, label: Option<&str>) -> NodeRow {
        NodeRow {
            uri: format!("{NS}{id}"),
            label: label.map(str::to_string),
            kind: format!("{NS}{kind}"),
            source: Some(format!("{NS}Source_Test")),
        }
    }

    fn edge(from: &str, to: &str) -> EdgeRow {
        EdgeRow {
            from: format!("{NS}{from}"),
            to: format!("{NS}{to}"),
        }
    }

    #[test]
    fn test_edges_need_both_endpoints() {
        let nodes = vec![
            node("Q1", "HistoricalPerson", Some("Maimonides")),
            node("W1", "HistoricalWork", None),
        ];
        let edges = vec![edge("W1", "Q1"), edge("W2", "Q1"), edge("Q1", "P9")];

        let data = project(nodes, edges);
        assert_eq!(data.nodes.len(), 2);
        assert_eq!(
            data.edges,
            vec![NetworkEdge {
                from: "W1".into(),
                to: "Q1".into()
            }]
        );
    }

    #[test]
    fn test_node_fields_and_dedup() {
        let nodes = vec![
            node("W1", "HistoricalWork", None),
            node("W1", "ScholarlyWork", Some("Other")),
        ];
        let data = project(nodes, Vec::new());

        assert_eq!(data.nodes.len(), 1);
        let n = &data.nodes[0];
        assert_eq!(n.label, "W1");
        assert_eq!(n.group, "HistoricalWork");
        assert_eq!(n.source.as_deref(), Some("Source_Test"));
    }

    #[test]
    fn test_parallel_edges_are_kept() {
        let nodes = vec![node("Q1", "HistoricalPerson", None), node("W1", "HistoricalWork", None)];
        let data = project(nodes, vec![edge("W1", "Q1"), edge("W1", "Q1")]);
        assert_eq!(data.edges.len(), 2);
    }
}
