//! Core traits for graph store abstraction.
//!
//! - [`SparqlExecutor`] - Execute SPARQL SELECT queries (required for all backends)
//! - [`GraphClient`] - Store-level introspection on top of query execution

use async_trait::async_trait;

use crate::error::AppError;
use crate::graph::row::{Params, RowStream};

/// Executes SPARQL queries against a graph store.
///
/// The store is read-only once loaded, so there is no mutation entry point.
#[async_trait]
pub trait SparqlExecutor: Send + Sync {
    /// Executes a SPARQL SELECT query and returns a stream of solution rows.
    ///
    /// # Arguments
    ///
    /// * `sparql` - The query string; `$name` tokens are bound from `params`
    /// * `params` - Terms to bind into the query
    ///
    /// # Errors
    ///
    /// A query that fails to parse, binds a parameter it does not mention,
    /// or is not a SELECT is an [`AppError::Query`]. A query that outlives
    /// the backend's time bound is an [`AppError::Timeout`].
    async fn execute_sparql(&self, sparql: &str, params: Params)
        -> Result<RowStream<'_>, AppError>;
}

/// A graph store client.
#[async_trait]
pub trait GraphClient: SparqlExecutor {
    /// Number of triples currently held by the store.
    async fn triple_count(&self) -> Result<usize, AppError>;
}
