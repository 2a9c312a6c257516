//! Direct navigation around a single resource.

use crate::context::{AppGraph, Context};
use crate::di::FromContext;
use crate::error::AppError;
use crate::vocab;

/// Reads individual properties of one resource.
///
/// Multi-valued properties resolve to their lexicographically smallest value.
#[derive(FromContext, Clone)]
pub struct ResourceRepository {
    graph: AppGraph,
}

impl ResourceRepository {
    pub async fn value(&self, uri: &str, predicate: &str) -> Result<Option<String>, AppError> {
        self.graph.value_str(uri, predicate).await
    }

    /// All values of `predicate`, sorted.
    pub async fn objects(&self, uri: &str, predicate: &str) -> Result<Vec<String>, AppError> {
        Ok(self
            .graph
            .objects(uri, predicate)
            .await?
            .into_iter()
            .map(|v| v.as_str().to_string())
            .collect())
    }

    pub async fn label(&self, uri: &str) -> Result<Option<String>, AppError> {
        self.value(uri, vocab::RDFS_LABEL).await
    }

    /// Label, falling back to the display id.
    pub async fn label_or_id(&self, uri: &str) -> Result<String, AppError> {
        Ok(self
            .label(uri)
            .await?
            .unwrap_or_else(|| vocab::local_id(uri).to_string()))
    }

    /// Title, falling back to the display id.
    pub async fn title_or_id(&self, uri: &str) -> Result<String, AppError> {
        Ok(self
            .value(uri, vocab::TITLE)
            .await?
            .unwrap_or_else(|| vocab::local_id(uri).to_string()))
    }
}
