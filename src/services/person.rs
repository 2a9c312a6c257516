//! Person listing and detail.

use std::collections::BTreeSet;

use super::aggregate::{dedup_by_key, joined, Aggregation};
use crate::context::Context;
use crate::di::FromContext;
use crate::error::AppError;
use crate::filter::SourceFilter;
use crate::models::{
    PersonDetail, PersonListItem, PersonPlace, PersonTime, PersonWork, ScholarlyMention,
};
use crate::repositories::{PersonRepository, ResourceRepository, ScholarlyRefRow};
use crate::vocab::{self, local_id};

/// Relationship sets gathered for one person.
#[derive(Debug, Default)]
struct PersonAggregate {
    label: String,
    works: BTreeSet<String>,
    places: BTreeSet<String>,
    times: BTreeSet<String>,
    mentions: BTreeSet<String>,
}

#[derive(FromContext, Clone)]
pub struct PersonService {
    persons: PersonRepository,
    resources: ResourceRepository,
}

impl PersonService {
    pub async fn list(&self, filter: &SourceFilter) -> Result<Vec<PersonListItem>, AppError> {
        let (base, works, places, times, mentions) = tokio::try_join!(
            self.persons.list(filter),
            self.persons.works(filter),
            self.persons.places(filter),
            self.persons.times(filter),
            self.persons.mentions(filter),
        )?;

        let mut agg = Aggregation::new();
        for row in base {
            let label = row.label.unwrap_or_default();
            agg.seed(row.uri, || PersonAggregate {
                label,
                ..Default::default()
            });
        }

        let mut dropped = agg.join(works, |l| l.owner.as_str(), |p, l| {
            p.works.insert(l.value);
        });
        dropped += agg.join(places, |l| l.owner.as_str(), |p, l| {
            p.places.insert(l.value);
        });
        dropped += agg.join(times, |t| t.owner.as_str(), |p, t| {
            let span = match t.end {
                Some(end) => format!("{}-{}", t.start, end),
                None => t.start,
            };
            p.times.insert(span);
        });
        dropped += agg.join(mentions, |l| l.owner.as_str(), |p, l| {
            p.mentions.insert(l.value);
        });
        tracing::debug!(persons = agg.len(), dropped, "aggregated person listing");

        let mut items: Vec<PersonListItem> = agg
            .into_entries()
            .map(|(uri, p)| PersonListItem {
                id: local_id(&uri).to_string(),
                work_count: p.works.len(),
                mention_count: p.mentions.len(),
                places: joined(&p.places),
                times: joined(&p.times),
                label: p.label,
                uri,
            })
            .collect();
        items.sort_by(|a, b| a.label.cmp(&b.label));
        Ok(items)
    }

    /// Resolves `id` under the ontology namespace, then under `id/`.
    pub async fn detail(&self, id: &str) -> Result<PersonDetail, AppError> {
        let (uri, label) = self.resolve(id).await?;

        let (authorities, works, scholarly, places, spans, source) = tokio::try_join!(
            self.resources.objects(&uri, vocab::AUTHORITY_LINK),
            self.persons.works_of(&uri),
            self.persons.scholarly_about(&uri),
            self.persons.places_of(&uri),
            self.persons.life_spans(&uri),
            self.resources.value(&uri, vocab::HAS_SOURCE),
        )?;

        let source = match source {
            Some(source_uri) => Some(self.resources.label_or_id(&source_uri).await?),
            None => None,
        };

        let works = dedup_by_key(works, |w| w.uri.clone())
            .into_iter()
            .map(|w| PersonWork {
                id: local_id(&w.uri).to_string(),
                uri: w.uri,
                title: w.name,
            })
            .collect();

        let places = dedup_by_key(places, |p| (p.place.clone(), p.kind.clone()))
            .into_iter()
            .map(|p| PersonPlace {
                place_id: local_id(&p.place).to_string(),
                place_uri: p.place,
                label: p.label,
                kind: p.kind,
            })
            .collect();

        let times = spans
            .into_iter()
            .filter(|s| s.birth.is_some() || s.death.is_some())
            .map(|s| PersonTime {
                kind: "Life".to_string(),
                start: s.birth,
                end: s.death,
            })
            .collect();

        Ok(PersonDetail {
            id: id.to_string(),
            uri,
            label,
            source,
            authorities,
            works,
            scholarly: scholarly_mentions(scholarly),
            places,
            times,
        })
    }

    async fn resolve(&self, id: &str) -> Result<(String, String), AppError> {
        let candidates = [vocab::JP, vocab::ID_NS]
            .into_iter()
            .filter_map(|namespace| vocab::entity_iri(namespace, id));
        for uri in candidates {
            if let Some(label) = self.resources.label(&uri).await? {
                return Ok((uri, label));
            }
        }
        Err(AppError::not_found("Person", id))
    }
}

/// One mention per scholarly work, titled by title, label or display id.
pub(crate) fn scholarly_mentions(rows: Vec<ScholarlyRefRow>) -> Vec<ScholarlyMention> {
    dedup_by_key(rows, |r| r.uri.clone())
        .into_iter()
        .map(|r| {
            let id = local_id(&r.uri).to_string();
            ScholarlyMention {
                title: r.title.or(r.label).unwrap_or_else(|| id.clone()),
                id,
                uri: r.uri,
                year: r.year,
            }
        })
        .collect()
}
