//! Person queries.

use super::{entity_rows, fetch_filtered, fetch_for, links, EntityRow, Link, NamedRow};
use super::ScholarlyRefRow;
use crate::catalog;
use crate::context::{AppGraph, Context};
use crate::di::FromContext;
use crate::error::AppError;
use crate::filter::SourceFilter;

/// A `timeFrom`/`timeUntil` span attached to a person.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeSpanRow {
    pub owner: String,
    pub start: String,
    pub end: Option<String>,
}

/// A place a person is related to, with the relation's type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceRelationRow {
    pub place: String,
    pub label: String,
    pub kind: Option<String>,
}

/// Birth and death years of one time relation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LifeSpanRow {
    pub birth: Option<String>,
    pub death: Option<String>,
}

#[derive(FromContext, Clone)]
pub struct PersonRepository {
    graph: AppGraph,
}

impl PersonRepository {
    /// Persons with a label, restricted by their own provenance.
    pub async fn list(&self, filter: &SourceFilter) -> Result<Vec<EntityRow>, AppError> {
        let rows = fetch_filtered(&self.graph, catalog::LIST_PERSONS, filter, "uri").await?;
        entity_rows(&rows)
    }

    /// (person, work) authorship pairs.
    pub async fn works(&self, filter: &SourceFilter) -> Result<Vec<Link>, AppError> {
        let rows = fetch_filtered(&self.graph, catalog::LIST_PERSONS_WORKS, filter, "person").await?;
        links(&rows, "person")
    }

    /// (person, place label) pairs through place relations.
    pub async fn places(&self, filter: &SourceFilter) -> Result<Vec<Link>, AppError> {
        let rows = fetch_filtered(&self.graph, catalog::LIST_PERSONS_PLACES, filter, "person").await?;
        links(&rows, "person")
    }

    pub async fn times(&self, filter: &SourceFilter) -> Result<Vec<TimeSpanRow>, AppError> {
        let rows = fetch_filtered(&self.graph, catalog::LIST_PERSONS_TIMES, filter, "person").await?;
        rows.iter()
            .map(|row| {
                Ok(TimeSpanRow {
                    owner: row.get("person")?,
                    start: row.get("start")?,
                    end: row.get_opt("end")?,
                })
            })
            .collect()
    }

    /// (person, scholarly work) pairs.
    pub async fn mentions(&self, filter: &SourceFilter) -> Result<Vec<Link>, AppError> {
        let rows =
            fetch_filtered(&self.graph, catalog::LIST_PERSONS_MENTIONS, filter, "person").await?;
        links(&rows, "person")
    }

    /// Titled works written by one person.
    pub async fn works_of(&self, uri: &str) -> Result<Vec<NamedRow>, AppError> {
        let rows = fetch_for(&self.graph, catalog::GET_PERSON_WORKS, "person", uri).await?;
        rows.iter()
            .map(|row| {
                Ok(NamedRow {
                    uri: row.get("work")?,
                    name: row.get("title")?,
                })
            })
            .collect()
    }

    pub async fn scholarly_about(&self, uri: &str) -> Result<Vec<ScholarlyRefRow>, AppError> {
        let rows = fetch_for(&self.graph, catalog::GET_PERSON_SCHOLARLY, "person", uri).await?;
        rows.iter().map(ScholarlyRefRow::from_row).collect()
    }

    pub async fn places_of(&self, uri: &str) -> Result<Vec<PlaceRelationRow>, AppError> {
        let rows = fetch_for(&self.graph, catalog::GET_PERSON_PLACES, "person", uri).await?;
        rows.iter()
            .map(|row| {
                Ok(PlaceRelationRow {
                    place: row.get("place")?,
                    label: row.get("label")?,
                    kind: row.get_opt("type")?,
                })
            })
            .collect()
    }

    pub async fn life_spans(&self, uri: &str) -> Result<Vec<LifeSpanRow>, AppError> {
        let rows = fetch_for(&self.graph, catalog::GET_PERSON_TIMES, "person", uri).await?;
        rows.iter()
            .map(|row| {
                Ok(LifeSpanRow {
                    birth: row.get_opt("birthYear")?,
                    death: row.get_opt("deathYear")?,
                })
            })
            .collect()
    }
}
