//! Subject listing and detail.

use std::collections::BTreeSet;

use super::aggregate::{dedup_by_key, Aggregation};
use crate::context::Context;
use crate::di::FromContext;
use crate::error::AppError;
use crate::filter::SourceFilter;
use crate::models::{SubjectDetail, SubjectListItem, WorkRef};
use crate::repositories::{EntityRow, Link, ResourceRepository, SubjectRepository};
use crate::vocab::{self, local_id};

#[derive(FromContext, Clone)]
pub struct SubjectService {
    subjects: SubjectRepository,
    resources: ResourceRepository,
}

impl SubjectService {
    pub async fn list(&self, filter: &SourceFilter) -> Result<Vec<SubjectListItem>, AppError> {
        let (base, works) =
            tokio::try_join!(self.subjects.list(filter), self.subjects.works(filter))?;
        Ok(count_works(base, works))
    }

    pub async fn detail(&self, id: &str) -> Result<SubjectDetail, AppError> {
        let uri = vocab::entity_iri(vocab::JP, id)
            .ok_or_else(|| AppError::not_found("Subject", id))?;
        let label = self
            .resources
            .label(&uri)
            .await?
            .ok_or_else(|| AppError::not_found("Subject", id))?;

        let (description, works) = tokio::try_join!(
            self.resources.value(&uri, vocab::SUBJECT_DESCRIPTION),
            self.subjects.works_on(&uri),
        )?;

        let mut works: Vec<WorkRef> = dedup_by_key(works, |w| w.uri.clone())
            .into_iter()
            .map(|w| {
                let id = local_id(&w.uri).to_string();
                WorkRef {
                    title: w.title.or(w.label).unwrap_or_else(|| id.clone()),
                    id,
                    uri: w.uri,
                }
            })
            .collect();
        works.sort_by(|a, b| a.title.cmp(&b.title));

        Ok(SubjectDetail {
            id: id.to_string(),
            uri,
            label,
            description,
            works,
        })
    }
}

/// Vocabulary listing: label (or display id) plus the distinct works
/// pointing at each entry, sorted by label.
pub(crate) fn count_works(base: Vec<EntityRow>, works: Vec<Link>) -> Vec<SubjectListItem> {
    let mut agg: Aggregation<(String, BTreeSet<String>)> = Aggregation::new();
    for row in base {
        let label = row
            .label
            .unwrap_or_else(|| local_id(&row.uri).to_string());
        agg.seed(row.uri, || (label, BTreeSet::new()));
    }
    agg.join(works, |l| l.owner.as_str(), |(_, set), l| {
        set.insert(l.value);
    });

    let mut items: Vec<SubjectListItem> = agg
        .into_entries()
        .map(|(uri, (label, works))| SubjectListItem {
            id: local_id(&uri).to_string(),
            label,
            count: works.len(),
            uri,
        })
        .collect();
    items.sort_by(|a, b| a.label.cmp(&b.label));
    items
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entity(uri: &str, label: Option<&str>) -> EntityRow {
        EntityRow {
            uri: uri.to_string(),
            label: label.map(str::to_string),
        }
    }

    fn link(owner: &str, value: &str) -> Link {
        Link {
            owner: owner.to_string(),
            value: value.to_string(),
        }
    }

    #[test]
    fn test_count_works_distinct_and_sorted() {
        let base = vec![
            entity("http://x.org/o#Logic", Some("Logic")),
            entity("http://x.org/o#Ethics", Some("Ethics")),
            entity("http://x.org/o#Bare", None),
        ];
        let works = vec![
            link("http://x.org/o#Ethics", "w1"),
            link("http://x.org/o#Ethics", "w1"),
            link("http://x.org/o#Ethics", "w2"),
            link("http://x.org/o#Unknown", "w3"),
        ];

        let items = count_works(base, works);
        let labels: Vec<_> = items.iter().map(|i| i.label.as_str()).collect();
        assert_eq!(labels, vec!["Bare", "Ethics", "Logic"]);
        assert_eq!(items[1].count, 2);
        assert_eq!(items[2].count, 0);
    }
}
