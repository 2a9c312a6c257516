//! Place queries.

use super::{fetch_filtered, fetch_for, links, Link};
use crate::catalog;
use crate::context::{AppGraph, Context};
use crate::di::FromContext;
use crate::error::AppError;
use crate::filter::SourceFilter;

/// A labelled place with its raw coordinate literals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceRow {
    pub uri: String,
    pub label: String,
    pub lat: Option<String>,
    pub long: Option<String>,
}

/// A person related to a place, with the relation's type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacePersonRow {
    pub uri: String,
    pub label: String,
    pub kind: Option<String>,
}

#[derive(FromContext, Clone)]
pub struct PlaceRepository {
    graph: AppGraph,
}

impl PlaceRepository {
    pub async fn list(&self, filter: &SourceFilter) -> Result<Vec<PlaceRow>, AppError> {
        let rows = fetch_filtered(&self.graph, catalog::LIST_PLACES, filter, "uri").await?;
        rows.iter()
            .map(|row| {
                Ok(PlaceRow {
                    uri: row.get("uri")?,
                    label: row.get("label")?,
                    lat: row.get_opt("lat")?,
                    long: row.get_opt("long")?,
                })
            })
            .collect()
    }

    /// (place, person) pairs through place relations.
    pub async fn people(&self, filter: &SourceFilter) -> Result<Vec<Link>, AppError> {
        let rows = fetch_filtered(&self.graph, catalog::LIST_PLACES_PEOPLE, filter, "place").await?;
        links(&rows, "place")
    }

    /// Labelled people related to one place, ordered by relation type then label.
    pub async fn people_at(&self, uri: &str) -> Result<Vec<PlacePersonRow>, AppError> {
        let rows = fetch_for(&self.graph, catalog::GET_PLACE_PEOPLE, "place", uri).await?;
        rows.iter()
            .map(|row| {
                Ok(PlacePersonRow {
                    uri: row.get("person")?,
                    label: row.get("label")?,
                    kind: row.get_opt("type")?,
                })
            })
            .collect()
    }
}
