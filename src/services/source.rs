use super::aggregate::dedup_by_key;
use crate::context::Context;
use crate::di::FromContext;
use crate::error::AppError;
use crate::models::SourceItem;
use crate::repositories::SourceRepository;
use crate::vocab::local_id;

#[derive(FromContext, Clone)]
pub struct SourceService {
    sources: SourceRepository,
}

impl SourceService {
    /// Every provenance tag with the number of entities carrying it.
    pub async fn list(&self) -> Result<Vec<SourceItem>, AppError> {
        let rows = dedup_by_key(self.sources.list().await?, |s| s.uri.clone());
        Ok(rows
            .into_iter()
            .map(|s| SourceItem {
                id: local_id(&s.uri).to_string(),
                label: s.label,
                description: format!("Data source containing {} entities", s.total),
                count: s.total,
            })
            .collect())
    }
}
