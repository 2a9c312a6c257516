//! Macro for convenient SPARQL query construction.

/// Macro for inline SPARQL queries with optional IRI parameters.
///
/// # Usage
///
/// ```ignore
/// use research_explorer::sparql;
///
/// // Query without parameters
/// let query = sparql!(graph, "SELECT ?s WHERE { ?s a jp:Place }");
///
/// // Query with IRI parameters
/// let query = sparql!(graph, "SELECT ?o WHERE { $s $p ?o }", s = subject, p = predicate);
///
/// let rows = query.fetch_all().await?;
/// ```
#[macro_export]
macro_rules! sparql {
    // Query without parameters
    ($graph:expr, $query:expr) => {
        $graph.query($query)
    };
    // Query with IRI parameters
    ($graph:expr, $query:expr, $($name:ident = $value:expr),+ $(,)?) => {
        $graph.query($query)$(.param_iri(stringify!($name), $value))+
    };
}

#[cfg(test)]
mod tests {
    use crate::error::AppError;
    use crate::graph::query::QueryExt;
    use crate::graph::row::{Params, RowStream};
    use crate::graph::traits::SparqlExecutor;

    struct CountingExecutor;

    #[async_trait::async_trait]
    impl SparqlExecutor for CountingExecutor {
        async fn execute_sparql(
            &self,
            _sparql: &str,
            params: Params,
        ) -> Result<RowStream<'_>, AppError> {
            let rows = vec![Ok(crate::graph::Row::from([(
                "count",
                crate::graph::Value::literal(params.len().to_string()),
            )]))];
            Ok(Box::pin(futures::stream::iter(rows)))
        }
    }

    #[tokio::test]
    async fn test_sparql_macro_no_params() {
        let executor = CountingExecutor;
        let row = sparql!(executor, "SELECT * WHERE { ?s ?p ?o }")
            .fetch_one()
            .await
            .unwrap()
            .unwrap();
        assert_eq!(row.get::<i64>("count").unwrap(), 0);
    }

    #[tokio::test]
    async fn test_sparql_macro_with_params() {
        let executor = CountingExecutor;
        let row = sparql!(
            executor,
            "SELECT ?o WHERE { $s $p ?o }",
            s = "http://example.org/s",
            p = "http://example.org/p",
        )
        .fetch_one()
        .await
        .unwrap()
        .unwrap();
        assert_eq!(row.get::<i64>("count").unwrap(), 2);
    }
}
