//! Scholarly literature listing and detail.

use std::cmp::Reverse;
use std::collections::{BTreeMap, BTreeSet};

use futures::future::try_join_all;

use super::aggregate::Aggregation;
use crate::context::Context;
use crate::di::FromContext;
use crate::error::AppError;
use crate::filter::SourceFilter;
use crate::models::{
    MentionedPerson, MentionedWork, Scholar, ScholarlyDetail, ScholarlyListItem, SourceRef,
};
use crate::repositories::{ResourceRepository, ScholarlyRepository};
use crate::vocab::{self, local_id};

#[derive(Debug, Default)]
struct ScholarlyAggregate {
    title: String,
    year: Option<String>,
    kind: Option<String>,
    publisher: Option<String>,
    /// Author URI to name; the first name seen for an author wins.
    authors: BTreeMap<String, String>,
    source: Option<SourceRef>,
    persons: BTreeSet<String>,
    works: BTreeSet<String>,
}

#[derive(FromContext, Clone)]
pub struct ScholarlyService {
    scholarly: ScholarlyRepository,
    resources: ResourceRepository,
}

impl ScholarlyService {
    /// Scholarly works, newest first.
    pub async fn list(&self, filter: &SourceFilter) -> Result<Vec<ScholarlyListItem>, AppError> {
        let (base, authors, sources, persons, works) = tokio::try_join!(
            self.scholarly.list(filter),
            self.scholarly.authors(filter),
            self.scholarly.sources(filter),
            self.scholarly.person_mentions(filter),
            self.scholarly.work_mentions(filter),
        )?;

        let mut agg = Aggregation::new();
        for row in base {
            let title = row
                .title
                .or(row.label)
                .unwrap_or_else(|| local_id(&row.uri).to_string());
            agg.seed(row.uri, || ScholarlyAggregate {
                title,
                year: row.year,
                kind: row.kind,
                publisher: row.publisher,
                ..Default::default()
            });
        }

        agg.join(authors, |a| a.owner.as_str(), |s, a| {
            s.authors.entry(a.target).or_insert(a.label);
        });
        agg.join(sources, |a| a.owner.as_str(), |s, a| {
            s.source.get_or_insert_with(|| SourceRef {
                id: local_id(&a.target).to_string(),
                label: a.label,
            });
        });
        agg.join(persons, |l| l.owner.as_str(), |s, l| {
            s.persons.insert(l.value);
        });
        agg.join(works, |l| l.owner.as_str(), |s, l| {
            s.works.insert(l.value);
        });

        let mut items: Vec<ScholarlyListItem> = agg
            .into_entries()
            .map(|(uri, s)| {
                let mut authors: Vec<Scholar> = s
                    .authors
                    .into_iter()
                    .map(|(author, name)| Scholar {
                        id: local_id(&author).to_string(),
                        name,
                    })
                    .collect();
                authors.sort_by(|a, b| a.name.cmp(&b.name));

                ScholarlyListItem {
                    id: local_id(&uri).to_string(),
                    uri,
                    title: s.title,
                    year: s.year,
                    authors,
                    source: s.source,
                    publisher: s.publisher,
                    kind: s.kind,
                    mentions_person_count: s.persons.len(),
                    mentions_work_count: s.works.len(),
                }
            })
            .collect();
        sort_newest_first(&mut items);
        Ok(items)
    }

    /// A scholarly work exists when it has a title.
    pub async fn detail(&self, id: &str) -> Result<ScholarlyDetail, AppError> {
        let uri = vocab::entity_iri(vocab::JP, id)
            .ok_or_else(|| AppError::not_found("Scholarly work", id))?;
        let title = self
            .resources
            .value(&uri, vocab::TITLE)
            .await?
            .ok_or_else(|| AppError::not_found("Scholarly work", id))?;

        let (publication_year, year, source, author_uris, person_uris, work_uris) = tokio::try_join!(
            self.resources.value(&uri, vocab::PUBLICATION_YEAR),
            self.resources.value(&uri, vocab::YEAR),
            self.resources.value(&uri, vocab::HAS_SOURCE),
            self.resources.objects(&uri, vocab::HAS_AUTHOR),
            self.resources.objects(&uri, vocab::ABOUT_PERSON),
            self.resources.objects(&uri, vocab::ABOUT_WORK),
        )?;

        let source = match source {
            Some(source_uri) => Some(SourceRef {
                id: local_id(&source_uri).to_string(),
                label: self.resources.label_or_id(&source_uri).await?,
            }),
            None => None,
        };

        let (author_names, person_labels, work_titles) = tokio::try_join!(
            try_join_all(author_uris.iter().map(|a| self.resources.label_or_id(a))),
            try_join_all(person_uris.iter().map(|p| self.resources.label_or_id(p))),
            try_join_all(work_uris.iter().map(|w| self.resources.title_or_id(w))),
        )?;

        let mut authors: Vec<Scholar> = author_uris
            .iter()
            .zip(author_names)
            .map(|(a, name)| Scholar {
                id: local_id(a).to_string(),
                name,
            })
            .collect();
        authors.sort_by(|a, b| a.name.cmp(&b.name));

        let mentions_person = person_uris
            .iter()
            .zip(person_labels)
            .map(|(p, label)| MentionedPerson {
                id: local_id(p).to_string(),
                label,
            })
            .collect();

        let mentions_work = work_uris
            .iter()
            .zip(work_titles)
            .map(|(w, title)| MentionedWork {
                id: local_id(w).to_string(),
                title,
            })
            .collect();

        Ok(ScholarlyDetail {
            uri,
            title,
            year: publication_year.or(year),
            authors,
            source,
            mentions_person,
            mentions_work,
        })
    }
}

/// Descending by `(year, title)`; works without a year sort as year `"0"`.
fn sort_newest_first(items: &mut [ScholarlyListItem]) {
    items.sort_by_cached_key(|i| {
        let year = i.year.clone().unwrap_or_else(|| "0".to_string());
        Reverse((year, i.title.clone()))
    });
}
