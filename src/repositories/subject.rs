//! Subject queries.

use super::{entity_rows, fetch_filtered, fetch_for, links, EntityRow, Link};
use crate::catalog;
use crate::context::{AppGraph, Context};
use crate::di::FromContext;
use crate::error::AppError;
use crate::filter::SourceFilter;

/// A work on a subject, with whatever display strings it has.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubjectWorkRow {
    pub uri: String,
    pub title: Option<String>,
    pub label: Option<String>,
}

#[derive(FromContext, Clone)]
pub struct SubjectRepository {
    graph: AppGraph,
}

impl SubjectRepository {
    pub async fn list(&self, filter: &SourceFilter) -> Result<Vec<EntityRow>, AppError> {
        let rows = fetch_filtered(&self.graph, catalog::LIST_SUBJECTS, filter, "uri").await?;
        entity_rows(&rows)
    }

    /// (subject, work) pairs.
    pub async fn works(&self, filter: &SourceFilter) -> Result<Vec<Link>, AppError> {
        let rows =
            fetch_filtered(&self.graph, catalog::LIST_SUBJECTS_WORKS, filter, "subject").await?;
        links(&rows, "subject")
    }

    pub async fn works_on(&self, uri: &str) -> Result<Vec<SubjectWorkRow>, AppError> {
        let rows = fetch_for(&self.graph, catalog::GET_SUBJECT_WORKS, "subject", uri).await?;
        rows.iter()
            .map(|row| {
                Ok(SubjectWorkRow {
                    uri: row.get("work")?,
                    title: row.get_opt("title")?,
                    label: row.get_opt("label")?,
                })
            })
            .collect()
    }
}
