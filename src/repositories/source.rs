use crate::catalog;
use crate::context::{AppGraph, Context};
use crate::di::FromContext;
use crate::error::AppError;

/// A provenance tag and the number of distinct entities carrying it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceRow {
    pub uri: String,
    pub label: String,
    pub total: usize,
}

#[derive(FromContext, Clone)]
pub struct SourceRepository {
    graph: AppGraph,
}

impl SourceRepository {
    /// Labelled `Source_*` resources, ordered by label.
    pub async fn list(&self) -> Result<Vec<SourceRow>, AppError> {
        let rows = self
            .graph
            .query(&catalog::LIST_SOURCES.unfiltered())
            .fetch_all()
            .await?;

        rows.iter()
            .map(|row| {
                let total: i64 = row.get("total")?;
                Ok(SourceRow {
                    uri: row.get("source")?,
                    label: row.get("label")?,
                    total: usize::try_from(total).unwrap_or(0),
                })
            })
            .collect()
    }
}
