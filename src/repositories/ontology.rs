//! Ontology schema and usage queries.

use std::collections::BTreeSet;

use crate::catalog::{self, Template};
use crate::context::{AppGraph, Context};
use crate::di::FromContext;
use crate::error::AppError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassRow {
    pub uri: String,
    pub label: Option<String>,
    pub comment: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyRow {
    pub uri: String,
    pub label: Option<String>,
    pub domain: Option<String>,
    pub range: Option<String>,
}

#[derive(FromContext, Clone)]
pub struct OntologyRepository {
    graph: AppGraph,
}

impl OntologyRepository {
    /// Declared `owl:Class`es of the ontology namespace.
    pub async fn classes(&self) -> Result<Vec<ClassRow>, AppError> {
        let rows = self
            .graph
            .query(&catalog::GET_ONTOLOGY_CLASSES.unfiltered())
            .fetch_all()
            .await?;
        rows.iter()
            .map(|row| {
                Ok(ClassRow {
                    uri: row.get("uri")?,
                    label: row.get_opt("label")?,
                    comment: row.get_opt("comment")?,
                })
            })
            .collect()
    }

    /// Declared `owl:ObjectProperty`s, one row per domain/range combination.
    pub async fn object_properties(&self) -> Result<Vec<PropertyRow>, AppError> {
        let rows = self
            .graph
            .query(&catalog::GET_ONTOLOGY_PROPERTIES.unfiltered())
            .fetch_all()
            .await?;
        rows.iter()
            .map(|row| {
                Ok(PropertyRow {
                    uri: row.get("uri")?,
                    label: row.get_opt("label")?,
                    domain: row.get_opt("domain")?,
                    range: row.get_opt("range")?,
                })
            })
            .collect()
    }

    /// Object and datatype properties declared by the ontology.
    pub async fn defined_properties(&self) -> Result<BTreeSet<String>, AppError> {
        self.uris(catalog::GET_DEFINED_PROPERTIES).await
    }

    /// Ontology classes that instances are actually typed with.
    pub async fn used_classes(&self) -> Result<BTreeSet<String>, AppError> {
        self.uris(catalog::GET_DATA_CLASSES).await
    }

    /// Ontology predicates that actually occur in triples.
    pub async fn used_properties(&self) -> Result<BTreeSet<String>, AppError> {
        self.uris(catalog::GET_DATA_PROPERTIES).await
    }

    async fn uris(&self, template: Template) -> Result<BTreeSet<String>, AppError> {
        let rows = self.graph.query(&template.unfiltered()).fetch_all().await?;
        rows.iter().map(|row| row.get::<String>("uri")).collect()
    }
}
