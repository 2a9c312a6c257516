//! Scholarly work queries.

use super::{fetch_filtered, links, Link};
use crate::catalog;
use crate::context::{AppGraph, Context};
use crate::di::FromContext;
use crate::error::AppError;
use crate::filter::SourceFilter;
use crate::graph::Row;

/// Descriptive fields of one scholarly work. Any of them may be missing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScholarlyRow {
    pub uri: String,
    pub title: Option<String>,
    pub label: Option<String>,
    pub year: Option<String>,
    pub kind: Option<String>,
    pub publisher: Option<String>,
}

/// A scholarly work pointing at a person or work it discusses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScholarlyRefRow {
    pub uri: String,
    pub title: Option<String>,
    pub label: Option<String>,
    pub year: Option<String>,
}

impl ScholarlyRefRow {
    pub(crate) fn from_row(row: &Row) -> Result<Self, AppError> {
        Ok(Self {
            uri: row.get("sw")?,
            title: row.get_opt("title")?,
            label: row.get_opt("label")?,
            year: row.get_opt("year")?,
        })
    }
}

/// A scholarly work linked to a labelled resource (author or source).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributedLink {
    pub owner: String,
    pub target: String,
    pub label: String,
}

#[derive(FromContext, Clone)]
pub struct ScholarlyRepository {
    graph: AppGraph,
}

impl ScholarlyRepository {
    pub async fn list(&self, filter: &SourceFilter) -> Result<Vec<ScholarlyRow>, AppError> {
        let rows = fetch_filtered(&self.graph, catalog::LIST_SCHOLARLY, filter, "uri").await?;
        rows.iter()
            .map(|row| {
                Ok(ScholarlyRow {
                    uri: row.get("uri")?,
                    title: row.get_opt("title")?,
                    label: row.get_opt("label")?,
                    year: row.get_opt("year")?,
                    kind: row.get_opt("type")?,
                    publisher: row.get_opt("publisher")?,
                })
            })
            .collect()
    }

    /// (scholarly work, author, author name) triples.
    pub async fn authors(&self, filter: &SourceFilter) -> Result<Vec<AttributedLink>, AppError> {
        let rows =
            fetch_filtered(&self.graph, catalog::LIST_SCHOLARLY_AUTHORS, filter, "sw").await?;
        attributed(&rows, "author", "name")
    }

    /// (scholarly work, source, source label) triples.
    pub async fn sources(&self, filter: &SourceFilter) -> Result<Vec<AttributedLink>, AppError> {
        let rows =
            fetch_filtered(&self.graph, catalog::LIST_SCHOLARLY_SOURCES, filter, "sw").await?;
        attributed(&rows, "source", "label")
    }

    /// (scholarly work, person) pairs.
    pub async fn person_mentions(&self, filter: &SourceFilter) -> Result<Vec<Link>, AppError> {
        let rows = fetch_filtered(
            &self.graph,
            catalog::LIST_SCHOLARLY_PERSON_MENTIONS,
            filter,
            "sw",
        )
        .await?;
        links(&rows, "sw")
    }

    /// (scholarly work, work) pairs.
    pub async fn work_mentions(&self, filter: &SourceFilter) -> Result<Vec<Link>, AppError> {
        let rows =
            fetch_filtered(&self.graph, catalog::LIST_SCHOLARLY_WORK_MENTIONS, filter, "sw")
                .await?;
        links(&rows, "sw")
    }
}

fn attributed(rows: &[Row], target: &str, label: &str) -> Result<Vec<AttributedLink>, AppError> {
    rows.iter()
        .map(|row| {
            Ok(AttributedLink {
                owner: row.get("sw")?,
                target: row.get(target)?,
                label: row.get(label)?,
            })
        })
        .collect()
}
