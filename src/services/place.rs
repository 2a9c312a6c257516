//! Place listing and detail.

use std::collections::BTreeSet;

use super::aggregate::{dedup_by_key, Aggregation};
use crate::context::Context;
use crate::di::FromContext;
use crate::error::AppError;
use crate::filter::SourceFilter;
use crate::models::{PersonAtPlace, PlaceDetail, PlaceListItem};
use crate::repositories::{PlaceRepository, ResourceRepository};
use crate::vocab::{self, local_id};

#[derive(Debug)]
struct PlaceAggregate {
    label: String,
    lat: Option<String>,
    long: Option<String>,
    people: BTreeSet<String>,
}

#[derive(FromContext, Clone)]
pub struct PlaceService {
    places: PlaceRepository,
    resources: ResourceRepository,
}

impl PlaceService {
    pub async fn list(&self, filter: &SourceFilter) -> Result<Vec<PlaceListItem>, AppError> {
        let (base, people) = tokio::try_join!(self.places.list(filter), self.places.people(filter))?;

        let mut agg = Aggregation::new();
        for row in base {
            agg.seed(row.uri, || PlaceAggregate {
                label: row.label,
                lat: row.lat,
                long: row.long,
                people: BTreeSet::new(),
            });
        }
        agg.join(people, |l| l.owner.as_str(), |p, l| {
            p.people.insert(l.value);
        });

        let mut items: Vec<PlaceListItem> = agg
            .into_entries()
            .map(|(uri, p)| PlaceListItem {
                id: local_id(&uri).to_string(),
                label: p.label,
                lat: p.lat,
                long: p.long,
                person_count: p.people.len(),
                uri,
            })
            .collect();
        items.sort_by(|a, b| a.label.cmp(&b.label));
        Ok(items)
    }

    pub async fn detail(&self, id: &str) -> Result<PlaceDetail, AppError> {
        let uri = vocab::entity_iri(vocab::JP, id)
            .ok_or_else(|| AppError::not_found("Place", id))?;
        let label = self
            .resources
            .label(&uri)
            .await?
            .ok_or_else(|| AppError::not_found("Place", id))?;

        let (lat, long, people) = tokio::try_join!(
            self.resources.value(&uri, vocab::LATITUDE),
            self.resources.value(&uri, vocab::LONGITUDE),
            self.places.people_at(&uri),
        )?;

        let people = dedup_by_key(people, |p| (p.uri.clone(), p.kind.clone()))
            .into_iter()
            .map(|p| PersonAtPlace {
                id: local_id(&p.uri).to_string(),
                uri: p.uri,
                label: p.label,
                kind: p.kind,
            })
            .collect();

        Ok(PlaceDetail {
            id: id.to_string(),
            uri,
            label,
            lat,
            long,
            people,
        })
    }
}
