//! Network view queries.

use super::fetch_filtered;
use crate::catalog::{self, Template};
use crate::context::{AppGraph, Context};
use crate::di::FromContext;
use crate::error::AppError;
use crate::filter::SourceFilter;

/// A typed entity that may appear as a network node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeRow {
    pub uri: String,
    pub label: Option<String>,
    pub kind: String,
    pub source: Option<String>,
}

/// A candidate edge between two resources.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeRow {
    pub from: String,
    pub to: String,
}

#[derive(FromContext, Clone)]
pub struct NetworkRepository {
    graph: AppGraph,
}

impl NetworkRepository {
    /// Instances of the networked classes, restricted by their own provenance.
    pub async fn nodes(&self, filter: &SourceFilter) -> Result<Vec<NodeRow>, AppError> {
        let rows = fetch_filtered(&self.graph, catalog::GET_NETWORK_NODES, filter, "s").await?;
        rows.iter()
            .map(|row| {
                Ok(NodeRow {
                    uri: row.get("s")?,
                    label: row.get_opt("label")?,
                    kind: row.get("type")?,
                    source: row.get_opt("source")?,
                })
            })
            .collect()
    }

    /// Edges over the direct relation predicates. Never source-filtered.
    pub async fn direct_edges(&self) -> Result<Vec<EdgeRow>, AppError> {
        self.edges(catalog::GET_NETWORK_EDGES_DIRECT).await
    }

    /// Person to place edges through place relations. Never source-filtered.
    pub async fn place_edges(&self) -> Result<Vec<EdgeRow>, AppError> {
        self.edges(catalog::GET_NETWORK_EDGES_PLACES).await
    }

    async fn edges(&self, template: Template) -> Result<Vec<EdgeRow>, AppError> {
        let rows = self.graph.query(&template.unfiltered()).fetch_all().await?;
        rows.iter()
            .map(|row| {
                Ok(EdgeRow {
                    from: row.get("s")?,
                    to: row.get("o")?,
                })
            })
            .collect()
    }
}
