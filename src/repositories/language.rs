//! Language queries.

use super::{entity_rows, fetch_filtered, fetch_for, links, EntityRow, Link, NamedRow};
use crate::catalog;
use crate::context::{AppGraph, Context};
use crate::di::FromContext;
use crate::error::AppError;
use crate::filter::SourceFilter;

#[derive(FromContext, Clone)]
pub struct LanguageRepository {
    graph: AppGraph,
}

impl LanguageRepository {
    pub async fn list(&self, filter: &SourceFilter) -> Result<Vec<EntityRow>, AppError> {
        let rows = fetch_filtered(&self.graph, catalog::LIST_LANGUAGES, filter, "uri").await?;
        entity_rows(&rows)
    }

    /// (language, work) pairs.
    pub async fn works(&self, filter: &SourceFilter) -> Result<Vec<Link>, AppError> {
        let rows =
            fetch_filtered(&self.graph, catalog::LIST_LANGUAGES_WORKS, filter, "language").await?;
        links(&rows, "language")
    }

    /// Titled works written in one language, ordered by title.
    pub async fn works_in(&self, uri: &str) -> Result<Vec<NamedRow>, AppError> {
        let rows = fetch_for(&self.graph, catalog::GET_LANGUAGE_WORKS, "language", uri).await?;
        rows.iter()
            .map(|row| {
                Ok(NamedRow {
                    uri: row.get("work")?,
                    name: row.get("title")?,
                })
            })
            .collect()
    }
}
