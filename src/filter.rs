//! Provenance filtering.
//!
//! A [`SourceFilter`] renders the graph pattern that restricts one query
//! variable to entities carrying a given `jp:hasSource`. The caller picks the
//! variable: the primary entity of a listing, or the owning entity of a
//! relationship query.

use oxigraph::model::NamedNode;

use crate::vocab;

/// Pattern that can never match. Used for identifiers that cannot form an IRI.
const MATCH_NOTHING: &str = "FILTER(false)";

/// Optional provenance restriction taken from a request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceFilter {
    source_id: Option<String>,
}

impl SourceFilter {
    /// Builds a filter from the raw `source` parameter. Empty means unfiltered.
    pub fn new(source_id: Option<&str>) -> Self {
        let source_id = source_id
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string);
        Self { source_id }
    }

    /// A filter that restricts nothing.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.source_id.is_some()
    }

    pub fn source_id(&self) -> Option<&str> {
        self.source_id.as_deref()
    }

    /// Pattern fragment restricting `?variable`, or `""` when inactive.
    pub fn on(&self, variable: &str) -> String {
        build_filter(self.source_id.as_deref(), variable)
    }
}

/// Renders the provenance constraint for `?variable`.
///
/// An absent or empty `source_id` yields the empty fragment. An identifier
/// that does not form a valid IRI yields a pattern matching nothing, so the
/// request degrades to an empty result instead of failing.
pub fn build_filter(source_id: Option<&str>, variable: &str) -> String {
    let Some(id) = source_id.filter(|s| !s.is_empty()) else {
        return String::new();
    };

    match NamedNode::new(vocab::jp_iri(id)) {
        Ok(source) => format!("?{variable} <{HAS_SOURCE}> {source} .", HAS_SOURCE = vocab::HAS_SOURCE),
        Err(e) => {
            tracing::debug!(source_id = id, error = %e, "Source id is not a valid IRI");
            MATCH_NOTHING.to_string()
        }
    }
}
