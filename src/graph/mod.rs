//! Graph abstraction layer over an embedded SPARQL store.
//!
//! # Architecture
//!
//! - [`SparqlExecutor`] - Execute SPARQL SELECT queries (required for all backends)
//! - [`GraphClient`] - Store-level introspection
//! - [`Graph`] - Wrapper adding the fluent query API and direct navigation
//!
//! # Usage
//!
//! ```ignore
//! use research_explorer::graph::{Graph, QueryExt};
//!
//! let graph = Graph::new(client);
//!
//! // Simple query
//! let rows = graph.query("SELECT ?s WHERE { ?s a jp:Place }")
//!     .fetch_all()
//!     .await?;
//!
//! // Query with a bound entity
//! let rows = graph.query("SELECT ?title WHERE { ?w jp:writtenBy $person ; jp:title ?title }")
//!     .param_iri("person", person_uri)
//!     .fetch_all()
//!     .await?;
//!
//! // Direct navigation
//! let label = graph.value(&person_uri, vocab::RDFS_LABEL).await?;
//! ```

mod macros;
mod query;
mod row;
mod traits;

pub mod backends;

// Re-export core types
pub use query::{Query, QueryExt};
pub use row::{FromValue, Params, Row, RowStream, Value};
pub use traits::{GraphClient, SparqlExecutor};

// Re-export macro (defined at crate root via #[macro_export])
#[doc(inline)]
pub use crate::sparql;

use crate::error::AppError;

const OBJECTS_QUERY: &str = "SELECT ?o WHERE { $subject $predicate ?o } ORDER BY STR(?o)";

/// High-level wrapper providing a convenient API for graph reads.
///
/// `Graph` wraps any [`GraphClient`] and adds:
/// - fluent queries via [`Graph::query`]
/// - single-subject navigation via [`Graph::value`] and [`Graph::objects`]
pub struct Graph<C: GraphClient> {
    client: C,
}

impl<C: GraphClient> Graph<C> {
    /// Creates a new graph wrapper around the given client.
    pub fn new(client: C) -> Self {
        Self { client }
    }

    /// Creates a query builder.
    pub fn query(&self, sparql: &str) -> Query<'_, C> {
        Query::new(&self.client, sparql)
    }

    /// All objects of `(subject, predicate, ?o)`, ordered by their string form.
    pub async fn objects(&self, subject: &str, predicate: &str) -> Result<Vec<Value>, AppError> {
        let rows = sparql!(self, OBJECTS_QUERY, subject = subject, predicate = predicate)
            .fetch_all()
            .await?;

        rows.iter().map(|row| row.get::<Value>("o")).collect()
    }

    /// A single object of `(subject, predicate, ?o)`.
    ///
    /// When the predicate is multi-valued the lexicographically smallest
    /// object is returned, so the answer never depends on store order.
    pub async fn value(&self, subject: &str, predicate: &str) -> Result<Option<Value>, AppError> {
        Ok(self.objects(subject, predicate).await?.into_iter().next())
    }

    /// Like [`Graph::value`], reduced to its string form.
    pub async fn value_str(
        &self,
        subject: &str,
        predicate: &str,
    ) -> Result<Option<String>, AppError> {
        Ok(self
            .value(subject, predicate)
            .await?
            .map(|v| v.as_str().to_string()))
    }

    /// Number of triples in the store.
    pub async fn triple_count(&self) -> Result<usize, AppError> {
        self.client.triple_count().await
    }
}

// Forward SparqlExecutor to the underlying client for convenience
#[async_trait::async_trait]
impl<C: GraphClient> SparqlExecutor for Graph<C> {
    async fn execute_sparql(
        &self,
        sparql: &str,
        params: Params,
    ) -> Result<RowStream<'_>, AppError> {
        self.client.execute_sparql(sparql, params).await
    }
}
