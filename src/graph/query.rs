//! Query builder for fluent SPARQL query construction.

use futures::TryStreamExt;

use crate::error::AppError;
use crate::graph::row::{Params, Row, RowStream, Value};
use crate::graph::traits::SparqlExecutor;

/// A builder for constructing and executing SPARQL queries.
///
/// # Example
///
/// ```ignore
/// let rows = Query::new(&client, "SELECT ?title WHERE { $work jp:title ?title }")
///     .param("work", Value::iri(work_uri))
///     .fetch_all()
///     .await?;
/// ```
pub struct Query<'a, E: SparqlExecutor + ?Sized> {
    executor: &'a E,
    sparql: String,
    params: Params,
}

impl<'a, E: SparqlExecutor + ?Sized> Query<'a, E> {
    /// Creates a new query builder.
    pub fn new(executor: &'a E, sparql: &str) -> Self {
        Self {
            executor,
            sparql: sparql.to_string(),
            params: Params::new(),
        }
    }

    /// Binds a `$name` token in the query to a term.
    pub fn param(mut self, name: &str, value: Value) -> Self {
        self.params.insert(name.to_string(), value);
        self
    }

    /// Binds a `$name` token to an IRI.
    pub fn param_iri(self, name: &str, iri: impl Into<String>) -> Self {
        self.param(name, Value::iri(iri))
    }

    /// Executes the query and returns a stream of rows.
    pub async fn execute(self) -> Result<RowStream<'a>, AppError> {
        self.executor
            .execute_sparql(&self.sparql, self.params)
            .await
    }

    /// Executes the query and collects all rows into a vector.
    pub async fn fetch_all(self) -> Result<Vec<Row>, AppError> {
        self.execute().await?.try_collect().await
    }

    /// Executes the query and returns the first row, if any.
    pub async fn fetch_one(self) -> Result<Option<Row>, AppError> {
        let mut stream = self.execute().await?;
        use futures::StreamExt;
        stream.next().await.transpose()
    }
}

/// Extension trait providing a convenient `query()` method.
///
/// Implemented for all [`SparqlExecutor`] types.
pub trait QueryExt: SparqlExecutor {
    /// Creates a new query builder for this executor.
    fn query(&self, sparql: &str) -> Query<'_, Self>
    where
        Self: Sized,
    {
        Query::new(self, sparql)
    }
}

impl<E: SparqlExecutor> QueryExt for E {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    struct MockExecutor {
        expected_sparql: String,
        expected_params: Params,
        rows: Vec<Row>,
    }

    #[async_trait::async_trait]
    impl SparqlExecutor for MockExecutor {
        async fn execute_sparql(
            &self,
            sparql: &str,
            params: Params,
        ) -> Result<RowStream<'_>, AppError> {
            assert_eq!(sparql, self.expected_sparql);
            assert_eq!(params, self.expected_params);
            Ok(Box::pin(futures::stream::iter(
                self.rows.clone().into_iter().map(Ok),
            )))
        }
    }

    #[tokio::test]
    async fn test_query_no_params() {
        let executor = MockExecutor {
            expected_sparql: "SELECT ?s WHERE { ?s ?p ?o }".to_string(),
            expected_params: HashMap::new(),
            rows: vec![],
        };

        let rows = executor
            .query("SELECT ?s WHERE { ?s ?p ?o }")
            .fetch_all()
            .await
            .unwrap();
        assert!(rows.is_empty());
    }

    #[tokio::test]
    async fn test_query_with_params() {
        let mut expected_params = HashMap::new();
        expected_params.insert("person".to_string(), Value::iri("http://example.org/Q1"));

        let executor = MockExecutor {
            expected_sparql: "SELECT ?w WHERE { ?w ?p $person }".to_string(),
            expected_params,
            rows: vec![Row::from([("w", Value::iri("http://example.org/W1"))])],
        };

        let row = executor
            .query("SELECT ?w WHERE { ?w ?p $person }")
            .param_iri("person", "http://example.org/Q1")
            .fetch_one()
            .await
            .unwrap()
            .unwrap();
        let work: String = row.get("w").unwrap();
        assert_eq!(work, "http://example.org/W1");
    }
}
