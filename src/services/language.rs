//! Language listing and detail.

use super::aggregate::dedup_by_key;
use super::subject::count_works;
use crate::context::Context;
use crate::di::FromContext;
use crate::error::AppError;
use crate::filter::SourceFilter;
use crate::models::{LanguageDetail, LanguageListItem, WorkRef};
use crate::repositories::{LanguageRepository, ResourceRepository};
use crate::vocab::{self, local_id};

#[derive(FromContext, Clone)]
pub struct LanguageService {
    languages: LanguageRepository,
    resources: ResourceRepository,
}

impl LanguageService {
    pub async fn list(&self, filter: &SourceFilter) -> Result<Vec<LanguageListItem>, AppError> {
        let (base, works) =
            tokio::try_join!(self.languages.list(filter), self.languages.works(filter))?;
        Ok(count_works(base, works))
    }

    pub async fn detail(&self, id: &str) -> Result<LanguageDetail, AppError> {
        let uri = vocab::entity_iri(vocab::JP, id)
            .ok_or_else(|| AppError::not_found("Language", id))?;
        let label = self
            .resources
            .label(&uri)
            .await?
            .ok_or_else(|| AppError::not_found("Language", id))?;

        let works = dedup_by_key(self.languages.works_in(&uri).await?, |w| w.uri.clone())
            .into_iter()
            .map(|w| WorkRef {
                id: local_id(&w.uri).to_string(),
                uri: w.uri,
                title: w.name,
            })
            .collect();

        Ok(LanguageDetail {
            id: id.to_string(),
            uri,
            label,
            works,
        })
    }
}
