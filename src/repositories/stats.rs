use crate::catalog::Template;
use crate::context::{AppGraph, Context};
use crate::di::FromContext;
use crate::error::AppError;
use crate::filter::SourceFilter;

#[derive(FromContext, Clone)]
pub struct StatsRepository {
    graph: AppGraph,
}

impl StatsRepository {
    /// Runs a `COUNT` template whose counted variable is `?s`.
    pub async fn count(&self, template: Template, filter: &SourceFilter) -> Result<usize, AppError> {
        let rows = super::fetch_filtered(&self.graph, template, filter, "s").await?;
        let total: i64 = match rows.first() {
            Some(row) => row.get("total")?,
            None => 0,
        };
        Ok(usize::try_from(total).unwrap_or(0))
    }
}
