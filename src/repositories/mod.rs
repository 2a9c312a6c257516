//! Data access layer.
//!
//! Each repository runs catalog templates against the shared graph and
//! decodes rows into small typed records. Repositories are built with the
//! `FromContext` derive and hold no state beyond the graph handle.

mod geo;
mod language;
mod network;
mod ontology;
mod person;
mod place;
mod resource;
mod scholarly;
mod source;
mod stats;
mod subject;
mod work;

pub use geo::{GeoRepository, PlacementRow};
pub use language::LanguageRepository;
pub use network::{EdgeRow, NetworkRepository, NodeRow};
pub use ontology::{ClassRow, OntologyRepository, PropertyRow};
pub use person::{LifeSpanRow, PersonRepository, PlaceRelationRow, TimeSpanRow};
pub use place::{PlacePersonRow, PlaceRepository, PlaceRow};
pub use resource::ResourceRepository;
pub use scholarly::{AttributedLink, ScholarlyRefRow, ScholarlyRepository, ScholarlyRow};
pub use source::{SourceRepository, SourceRow};
pub use stats::StatsRepository;
pub use subject::{SubjectRepository, SubjectWorkRow};
pub use work::WorkRepository;

use crate::catalog::Template;
use crate::context::AppGraph;
use crate::error::AppError;
use crate::filter::SourceFilter;
use crate::graph::Row;

/// Base listing row: an entity and its display label, if it has one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityRow {
    pub uri: String,
    pub label: Option<String>,
}

/// Relationship row: the owning entity and one related value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub owner: String,
    pub value: String,
}

/// Entity reference with a display string (title or name).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedRow {
    pub uri: String,
    pub name: String,
}

/// Runs `template` with the provenance constraint bound to `variable`.
async fn fetch_filtered(
    graph: &AppGraph,
    template: Template,
    filter: &SourceFilter,
    variable: &str,
) -> Result<Vec<Row>, AppError> {
    let sparql = template.render(&filter.on(variable))?;
    tracing::debug!(template = template.name(), filtered = filter.is_active(), "running listing query");
    graph.query(&sparql).fetch_all().await
}

/// Runs `template` with one entity bound to `$param`.
async fn fetch_for(
    graph: &AppGraph,
    template: Template,
    param: &str,
    uri: &str,
) -> Result<Vec<Row>, AppError> {
    graph
        .query(&template.unfiltered())
        .param_iri(param, uri)
        .fetch_all()
        .await
}

fn entity_rows(rows: &[Row]) -> Result<Vec<EntityRow>, AppError> {
    rows.iter()
        .map(|row| {
            Ok(EntityRow {
                uri: row.get("uri")?,
                label: row.get_opt("label")?,
            })
        })
        .collect()
}

fn links(rows: &[Row], owner: &str) -> Result<Vec<Link>, AppError> {
    rows.iter()
        .map(|row| {
            Ok(Link {
                owner: row.get(owner)?,
                value: row.get("value")?,
            })
        })
        .collect()
}
