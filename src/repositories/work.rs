//! Work queries.

use super::{entity_rows, fetch_filtered, fetch_for, links, EntityRow, Link, NamedRow};
use super::ScholarlyRefRow;
use crate::catalog;
use crate::context::{AppGraph, Context};
use crate::di::FromContext;
use crate::error::AppError;
use crate::filter::SourceFilter;

#[derive(FromContext, Clone)]
pub struct WorkRepository {
    graph: AppGraph,
}

impl WorkRepository {
    /// Works with a title, restricted by their own provenance.
    ///
    /// The title is returned as the row label.
    pub async fn list(&self, filter: &SourceFilter) -> Result<Vec<EntityRow>, AppError> {
        let rows = fetch_filtered(&self.graph, catalog::LIST_WORKS, filter, "uri").await?;
        entity_rows(&rows)
    }

    /// (work, author label) pairs.
    pub async fn authors(&self, filter: &SourceFilter) -> Result<Vec<Link>, AppError> {
        let rows = fetch_filtered(&self.graph, catalog::LIST_WORKS_AUTHORS, filter, "work").await?;
        links(&rows, "work")
    }

    /// (work, scholarly work) pairs.
    pub async fn mentions(&self, filter: &SourceFilter) -> Result<Vec<Link>, AppError> {
        let rows = fetch_filtered(&self.graph, catalog::LIST_WORKS_MENTIONS, filter, "work").await?;
        links(&rows, "work")
    }

    /// Labelled authors of one work.
    pub async fn authors_of(&self, uri: &str) -> Result<Vec<NamedRow>, AppError> {
        let rows = fetch_for(&self.graph, catalog::GET_WORK_AUTHORS, "work", uri).await?;
        rows.iter()
            .map(|row| {
                Ok(NamedRow {
                    uri: row.get("author")?,
                    name: row.get("name")?,
                })
            })
            .collect()
    }

    /// Titled scholarly works about one work.
    pub async fn scholarly_about(&self, uri: &str) -> Result<Vec<ScholarlyRefRow>, AppError> {
        let rows = fetch_for(&self.graph, catalog::GET_WORK_SCHOLARLY, "work", uri).await?;
        rows.iter().map(ScholarlyRefRow::from_row).collect()
    }
}
