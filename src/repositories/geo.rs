use super::fetch_filtered;
use crate::catalog;
use crate::context::{AppGraph, Context};
use crate::di::FromContext;
use crate::error::AppError;
use crate::filter::SourceFilter;

/// A dated person-at-place pairing. Coordinates and years are raw literals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacementRow {
    pub person: String,
    pub person_label: String,
    pub place_label: String,
    pub lat: String,
    pub long: String,
    pub start: Option<String>,
    pub end: Option<String>,
    pub place_type: Option<String>,
}

#[derive(FromContext, Clone)]
pub struct GeoRepository {
    graph: AppGraph,
}

impl GeoRepository {
    /// Person/place pairs with coordinates and at least one year.
    ///
    /// Life years of the person win over the place relation's own span.
    pub async fn placements(&self, filter: &SourceFilter) -> Result<Vec<PlacementRow>, AppError> {
        let rows = fetch_filtered(&self.graph, catalog::GET_GEO_JSON, filter, "person").await?;
        rows.iter()
            .map(|row| {
                Ok(PlacementRow {
                    person: row.get("person")?,
                    person_label: row.get("personLabel")?,
                    place_label: row.get("placeLabel")?,
                    lat: row.get("lat")?,
                    long: row.get("long")?,
                    start: row.get_opt("start")?,
                    end: row.get_opt("end")?,
                    place_type: row.get_opt("placeType")?,
                })
            })
            .collect()
    }
}
