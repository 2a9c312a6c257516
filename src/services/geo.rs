//! GeoJSON export of dated person-at-place pairings.

use crate::context::Context;
use crate::di::FromContext;
use crate::error::AppError;
use crate::filter::SourceFilter;
use crate::models::{Feature, FeatureCollection, FeatureProperties, Point};
use crate::repositories::{GeoRepository, PlacementRow};
use crate::vocab::local_id;

#[derive(FromContext, Clone)]
pub struct GeoService {
    geo: GeoRepository,
}

impl GeoService {
    /// One point feature per dated pairing. Pairings whose coordinates or
    /// years do not parse are skipped.
    pub async fn features(&self, filter: &SourceFilter) -> Result<FeatureCollection, AppError> {
        let rows = self.geo.placements(filter).await?;
        let total = rows.len();

        let features: Vec<Feature> = rows.into_iter().filter_map(to_feature).collect();
        if features.len() < total {
            tracing::debug!(skipped = total - features.len(), "skipped unparseable placements");
        }
        Ok(FeatureCollection::new(features))
    }
}

fn to_feature(row: PlacementRow) -> Option<Feature> {
    let lat: f64 = row.lat.trim().parse().ok()?;
    let long: f64 = row.long.trim().parse().ok()?;
    let start = parse_year(row.start.as_deref())?;
    let end = parse_year(row.end.as_deref())?;

    Some(Feature::new(
        Point::new(lat, long),
        FeatureProperties {
            person_id: local_id(&row.person).to_string(),
            person_label: row.person_label,
            place_label: row.place_label,
            kind: row.place_type.unwrap_or_else(|| "Unknown".to_string()),
            start,
            end,
        },
    ))
}

/// `Some(None)` for an absent year, `None` for one that does not parse.
fn parse_year(value: Option<&str>) -> Option<Option<i64>> {
    match value {
        None => Some(None),
        Some(v) => v.trim().parse().ok().map(Some),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn placement(lat: &str, start: Option<&str>, end: Option<&str>) -> PlacementRow {
        PlacementRow {
            person: "http://jewish_philosophy.org/ontology#Q1".into(),
            person_label: "Maimonides".into(),
            place_label: "Fustat".into(),
            lat: lat.into(),
            long: "31.23".into(),
            start: start.map(str::to_string),
            end: end.map(str::to_string),
            place_type: None,
        }
    }

    #[test]
    fn test_feature_from_placement() {
        let f = to_feature(placement("30.0", Some("1138"), Some("1204"))).unwrap();
        assert_eq!(f.geometry.coordinates, [31.23, 30.0]);
        assert_eq!(f.properties.person_id, "Q1");
        assert_eq!(f.properties.kind, "Unknown");
        assert_eq!(f.properties.start, Some(1138));
        assert_eq!(f.properties.end, Some(1204));
    }

    #[test]
    fn test_open_ended_span() {
        let f = to_feature(placement("30.0", Some("1138"), None)).unwrap();
        assert_eq!(f.properties.end, None);
    }

    #[test]
    fn test_unparseable_values_skip_feature() {
        assert!(to_feature(placement("north", Some("1138"), None)).is_none());
        assert!(to_feature(placement("30.0", Some("c. 1138"), None)).is_none());
    }
}
