//! Embedded oxigraph backend.
//!
//! Holds the whole graph in memory and answers SPARQL SELECT queries.
//!
//! # Example
//!
//! ```ignore
//! use research_explorer::graph::backends::oxigraph::OxigraphClient;
//! use research_explorer::graph::{Graph, QueryExt};
//!
//! let client = OxigraphClient::in_memory(Duration::from_secs(10))?;
//! let report = client.load_files(&config.store.file_paths());
//! let graph = Graph::new(client);
//!
//! let rows = graph.query("SELECT ?s WHERE { ?s a jp:Place }")
//!     .fetch_all()
//!     .await?;
//! ```

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use async_trait::async_trait;
use oxigraph::io::RdfFormat;
use oxigraph::model::{Literal, NamedNode, Term};
use oxigraph::sparql::QueryResults;
use oxigraph::store::Store;

use crate::error::AppError;
use crate::graph::row::{Params, Row, RowStream, Value};
use crate::graph::traits::{GraphClient, SparqlExecutor};

/// Outcome of loading the configured data files.
#[derive(Debug, Default)]
pub struct LoadReport {
    /// Files that loaded completely, in load order.
    pub loaded: Vec<PathBuf>,
    /// Files that were skipped, each as an [`AppError::Load`].
    pub skipped: Vec<AppError>,
    /// Triples held by the store after loading.
    pub triples: usize,
}

/// In-memory oxigraph client.
///
/// Cheap to clone - the store is shared.
#[derive(Clone)]
pub struct OxigraphClient {
    store: Store,
    timeout: Duration,
}

impl OxigraphClient {
    /// Creates an empty in-memory store whose queries are bounded by `timeout`.
    pub fn in_memory(timeout: Duration) -> Result<Self, AppError> {
        let store = Store::new()
            .map_err(|e| AppError::Store(format!("failed to create oxigraph store: {e}")))?;
        Ok(Self { store, timeout })
    }

    /// Loads every file in order, skipping (and logging) the ones that fail.
    ///
    /// Each file is loaded atomically, so a file that fails to parse
    /// contributes no triples at all.
    pub fn load_files(&self, paths: &[PathBuf]) -> LoadReport {
        let mut report = LoadReport::default();

        for path in paths {
            tracing::info!("Loading {}...", path.display());
            match self.load_file(path) {
                Ok(()) => report.loaded.push(path.clone()),
                Err(e) => {
                    tracing::warn!(error = %e, "Skipping data file");
                    report.skipped.push(e);
                }
            }
        }

        report.triples = self.store.len().unwrap_or(0);
        tracing::info!(
            "Graph loaded with {} triples ({} files, {} skipped)",
            report.triples,
            report.loaded.len(),
            report.skipped.len()
        );
        report
    }

    /// Loads a single file, picking the RDF syntax from its extension.
    pub fn load_file(&self, path: &Path) -> Result<(), AppError> {
        let load_error = |message: String| AppError::Load {
            path: path.display().to_string(),
            message,
        };

        let format = format_for_path(path)
            .ok_or_else(|| load_error("unrecognised RDF file extension".to_string()))?;
        let file = File::open(path).map_err(|e| load_error(e.to_string()))?;

        self.store
            .load_from_reader(format, BufReader::new(file))
            .map_err(|e| load_error(e.to_string()))
    }

    /// Loads serialized triples from a string.
    pub fn load_str(&self, format: RdfFormat, data: &str) -> Result<(), AppError> {
        self.store
            .load_from_reader(format, data.as_bytes())
            .map_err(|e| AppError::Load {
                path: "<inline>".to_string(),
                message: e.to_string(),
            })
    }
}

impl std::fmt::Debug for OxigraphClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OxigraphClient")
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[async_trait]
impl SparqlExecutor for OxigraphClient {
    async fn execute_sparql(
        &self,
        sparql: &str,
        params: Params,
    ) -> Result<RowStream<'_>, AppError> {
        let bound = bind_params(sparql, &params)?;
        let store = self.store.clone();
        let started = Instant::now();

        let task = tokio::task::spawn_blocking(move || run_select(&store, &bound));
        let rows = match tokio::time::timeout(self.timeout, task).await {
            Ok(joined) => joined
                .map_err(|e| AppError::Internal(format!("query task failed: {e}")))??,
            Err(_) => {
                return Err(AppError::Timeout {
                    millis: self.timeout.as_millis() as u64,
                })
            }
        };

        tracing::debug!(
            rows = rows.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "query executed"
        );

        Ok(Box::pin(futures::stream::iter(rows.into_iter().map(Ok))))
    }
}

#[async_trait]
impl GraphClient for OxigraphClient {
    async fn triple_count(&self) -> Result<usize, AppError> {
        self.store
            .len()
            .map_err(|e| AppError::Store(format!("failed to count triples: {e}")))
    }
}

/// RDF syntax for a data file, by extension.
fn format_for_path(path: &Path) -> Option<RdfFormat> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "owl" => Some(RdfFormat::RdfXml),
        other => RdfFormat::from_extension(other),
    }
}

/// Replaces every bound `$name` token with the N-Triples form of its term.
///
/// Unbound `$name` tokens stay as SPARQL variables. A parameter that never
/// occurs in the query is a programming error.
fn bind_params(sparql: &str, params: &Params) -> Result<String, AppError> {
    if params.is_empty() {
        return Ok(sparql.to_string());
    }

    let query_error = |message: String| AppError::Query {
        message,
        query: sparql.to_string(),
    };

    let mut out = String::with_capacity(sparql.len());
    let mut used = std::collections::HashSet::new();
    let mut chars = sparql.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if c != '$' {
            out.push(c);
            continue;
        }

        let start = i + 1;
        let mut end = start;
        while let Some(&(j, next)) = chars.peek() {
            if next.is_ascii_alphanumeric() || next == '_' {
                end = j + next.len_utf8();
                chars.next();
            } else {
                break;
            }
        }

        let name = &sparql[start..end];
        match params.get(name) {
            Some(value) => {
                out.push_str(&render_term(value).map_err(query_error)?);
                used.insert(name);
            }
            None => {
                out.push('$');
                out.push_str(name);
            }
        }
    }

    if let Some(unused) = params.keys().find(|k| !used.contains(k.as_str())) {
        return Err(query_error(format!(
            "parameter '{}' does not occur in the query",
            unused
        )));
    }

    Ok(out)
}

fn render_term(value: &Value) -> Result<String, String> {
    match value {
        Value::Iri(iri) => NamedNode::new(iri.as_str())
            .map(|n| n.to_string())
            .map_err(|e| format!("invalid IRI '{}': {}", iri, e)),
        Value::Literal(lexical) => Ok(Literal::new_simple_literal(lexical.as_str()).to_string()),
        Value::BlankNode(label) => Err(format!("cannot bind blank node _:{}", label)),
    }
}

fn run_select(store: &Store, sparql: &str) -> Result<Vec<Row>, AppError> {
    let query_error = |message: String| AppError::Query {
        message,
        query: sparql.to_string(),
    };

    #[allow(deprecated)]
    let results = store.query(sparql).map_err(|e| query_error(e.to_string()))?;

    match results {
        QueryResults::Solutions(solutions) => {
            let mut rows = Vec::new();
            for solution in solutions {
                let solution = solution.map_err(|e| query_error(e.to_string()))?;
                let data = solution
                    .iter()
                    .map(|(var, term)| (var.as_str().to_string(), term_to_value(term)))
                    .collect();
                rows.push(Row::new(data));
            }
            Ok(rows)
        }
        _ => Err(query_error("expected a SELECT query".to_string())),
    }
}

fn term_to_value(term: &Term) -> Value {
    match term {
        Term::NamedNode(node) => Value::Iri(node.as_str().to_string()),
        Term::BlankNode(node) => Value::BlankNode(node.as_str().to_string()),
        Term::Literal(literal) => Value::Literal(literal.value().to_string()),
        #[allow(unreachable_patterns)]
        other => Value::Literal(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::QueryExt;

    const DATA: &str = r#"
        @prefix ex: <http://example.org/> .
        ex:a ex:name "Alpha" ; ex:knows ex:b .
        ex:b ex:name "Beta" .
    "#;

    fn client() -> OxigraphClient {
        let client = OxigraphClient::in_memory(Duration::from_secs(5)).unwrap();
        client.load_str(RdfFormat::Turtle, DATA).unwrap();
        client
    }

    #[test]
    fn test_bind_params_replaces_tokens() {
        let mut params = Params::new();
        params.insert("s".into(), Value::iri("http://example.org/a"));
        let out = bind_params("SELECT ?o WHERE { $s ?p ?o . $sx ?q ?r }", &params).unwrap();
        assert_eq!(
            out,
            "SELECT ?o WHERE { <http://example.org/a> ?p ?o . $sx ?q ?r }"
        );
    }

    #[test]
    fn test_bind_params_escapes_literals() {
        let mut params = Params::new();
        params.insert("name".into(), Value::literal("say \"hi\""));
        let out = bind_params("SELECT ?s WHERE { ?s ?p $name }", &params).unwrap();
        assert_eq!(out, r#"SELECT ?s WHERE { ?s ?p "say \"hi\"" }"#);
    }

    #[test]
    fn test_bind_params_rejects_unused() {
        let mut params = Params::new();
        params.insert("missing".into(), Value::iri("http://example.org/a"));
        let result = bind_params("SELECT ?s WHERE { ?s ?p ?o }", &params);
        assert!(matches!(result, Err(AppError::Query { .. })));
    }

    #[test]
    fn test_bind_params_rejects_invalid_iri() {
        let mut params = Params::new();
        params.insert("s".into(), Value::iri("http://example.org/a> } #"));
        let result = bind_params("SELECT ?o WHERE { $s ?p ?o }", &params);
        assert!(matches!(result, Err(AppError::Query { .. })));
    }

    #[test]
    fn test_format_for_path() {
        assert_eq!(format_for_path(Path::new("a/b.ttl")), Some(RdfFormat::Turtle));
        assert_eq!(format_for_path(Path::new("vocab.owl")), Some(RdfFormat::RdfXml));
        assert_eq!(format_for_path(Path::new("notes.txt")), None);
        assert_eq!(format_for_path(Path::new("noext")), None);
    }

    #[tokio::test]
    async fn test_select_with_bound_subject() {
        let client = client();
        let rows = client
            .query("SELECT ?name WHERE { $s <http://example.org/name> ?name }")
            .param_iri("s", "http://example.org/b")
            .fetch_all()
            .await
            .unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].get::<String>("name").unwrap(), "Beta");
    }

    #[tokio::test]
    async fn test_optional_leaves_variable_unbound() {
        let client = client();
        let rows = client
            .query(
                "SELECT ?s ?k WHERE { ?s <http://example.org/name> ?n \
                 OPTIONAL { ?s <http://example.org/knows> ?k } } ORDER BY ?s",
            )
            .fetch_all()
            .await
            .unwrap();

        assert_eq!(rows.len(), 2);
        assert!(rows[0].get_raw("k").is_some());
        assert!(rows[1].get_raw("k").is_none());
    }

    #[tokio::test]
    async fn test_malformed_query_is_query_error() {
        let client = client();
        let result = client.query("SELECT WHERE {").fetch_all().await;
        assert!(matches!(result, Err(AppError::Query { .. })));
    }

    #[tokio::test]
    async fn test_ask_is_rejected() {
        let client = client();
        let result = client.query("ASK { ?s ?p ?o }").fetch_all().await;
        assert!(matches!(result, Err(AppError::Query { .. })));
    }

    #[tokio::test]
    async fn test_triple_count() {
        assert_eq!(client().triple_count().await.unwrap(), 3);
    }

    #[test]
    fn test_load_files_skips_failures() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("good.ttl");
        let broken = dir.path().join("broken.ttl");
        let missing = dir.path().join("missing.ttl");
        std::fs::write(&good, DATA).unwrap();
        std::fs::write(&broken, "@prefix ex: <http://example.org/> .\nex:c ex:name \"Gamma\" .\nex:d ex:name").unwrap();

        let client = OxigraphClient::in_memory(Duration::from_secs(5)).unwrap();
        let report = client.load_files(&[good.clone(), broken, missing]);

        assert_eq!(report.loaded, vec![good]);
        assert_eq!(report.skipped.len(), 2);
        assert!(report
            .skipped
            .iter()
            .all(|e| matches!(e, AppError::Load { .. })));
        // The broken file contributed nothing, not even its valid first triple
        assert_eq!(report.triples, 3);
    }
}
