//! Work listing and detail.

use std::collections::BTreeSet;

use futures::future::try_join_all;

use super::aggregate::{dedup_by_key, joined, Aggregation};
use super::person::scholarly_mentions;
use crate::context::Context;
use crate::di::FromContext;
use crate::error::AppError;
use crate::filter::SourceFilter;
use crate::models::{WorkAuthor, WorkDetail, WorkListItem};
use crate::repositories::{ResourceRepository, WorkRepository};
use crate::vocab::{self, local_id};

#[derive(Debug, Default)]
struct WorkAggregate {
    title: String,
    authors: BTreeSet<String>,
    mentions: BTreeSet<String>,
}

#[derive(FromContext, Clone)]
pub struct WorkService {
    works: WorkRepository,
    resources: ResourceRepository,
}

impl WorkService {
    pub async fn list(&self, filter: &SourceFilter) -> Result<Vec<WorkListItem>, AppError> {
        let (base, authors, mentions) = tokio::try_join!(
            self.works.list(filter),
            self.works.authors(filter),
            self.works.mentions(filter),
        )?;

        let mut agg = Aggregation::new();
        for row in base {
            let title = row.label.unwrap_or_default();
            agg.seed(row.uri, || WorkAggregate {
                title,
                ..Default::default()
            });
        }
        agg.join(authors, |l| l.owner.as_str(), |w, l| {
            w.authors.insert(l.value);
        });
        agg.join(mentions, |l| l.owner.as_str(), |w, l| {
            w.mentions.insert(l.value);
        });

        let mut items: Vec<WorkListItem> = agg
            .into_entries()
            .map(|(uri, w)| WorkListItem {
                id: local_id(&uri).to_string(),
                authors: joined(&w.authors),
                mention_count: w.mentions.len(),
                title: w.title,
                uri,
            })
            .collect();
        items.sort_by(|a, b| a.title.cmp(&b.title));
        Ok(items)
    }

    /// A work exists when it has a title.
    pub async fn detail(&self, id: &str) -> Result<WorkDetail, AppError> {
        let uri = vocab::entity_iri(vocab::JP, id)
            .ok_or_else(|| AppError::not_found("Work", id))?;
        let title = self
            .resources
            .value(&uri, vocab::TITLE)
            .await?
            .ok_or_else(|| AppError::not_found("Work", id))?;

        let (authors, subject_uris, language_uris, scholarly) = tokio::try_join!(
            self.works.authors_of(&uri),
            self.resources.objects(&uri, vocab::HAS_SUBJECT),
            self.resources.objects(&uri, vocab::WRITTEN_IN_LANGUAGE),
            self.works.scholarly_about(&uri),
        )?;

        let (subjects, languages) = tokio::try_join!(
            try_join_all(subject_uris.iter().map(|s| self.resources.label_or_id(s))),
            try_join_all(language_uris.iter().map(|l| self.resources.label_or_id(l))),
        )?;

        let authors = dedup_by_key(authors, |a| a.uri.clone())
            .into_iter()
            .map(|a| WorkAuthor {
                id: local_id(&a.uri).to_string(),
                uri: a.uri,
                label: a.name,
            })
            .collect();

        Ok(WorkDetail {
            id: id.to_string(),
            uri,
            title,
            authors,
            subjects,
            languages,
            scholarly_mentions: scholarly_mentions(scholarly),
        })
    }
}
