//! Keyed aggregation of relationship rows onto a base listing.
//!
//! A listing is built in two phases. The base query seeds one record per
//! entity URI. Every relationship query is then joined against that key set:
//! rows whose owning entity was not seeded are dropped. Because the base
//! query is the only one that applies the full entity filter, the join is
//! what keeps relationship rows consistent with it.

use std::collections::{BTreeMap, BTreeSet};

/// Display value for an empty relationship set.
pub const EMPTY_DISPLAY: &str = "-";

/// Aggregate records keyed by entity URI.
#[derive(Debug)]
pub struct Aggregation<R> {
    records: BTreeMap<String, R>,
}

impl<R> Default for Aggregation<R> {
    fn default() -> Self {
        Self {
            records: BTreeMap::new(),
        }
    }
}

impl<R> Aggregation<R> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a record for `uri`. The first seed for a URI wins.
    pub fn seed(&mut self, uri: impl Into<String>, record: impl FnOnce() -> R) -> bool {
        match self.records.entry(uri.into()) {
            std::collections::btree_map::Entry::Vacant(slot) => {
                slot.insert(record());
                true
            }
            std::collections::btree_map::Entry::Occupied(_) => false,
        }
    }

    pub fn contains(&self, uri: &str) -> bool {
        self.records.contains_key(uri)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Joins relationship rows against the seeded key set.
    ///
    /// `owner` names the entity each row belongs to. Rows for seeded entities
    /// are handed to `apply`; the rest are dropped. Returns the number dropped.
    pub fn join<T>(
        &mut self,
        rows: impl IntoIterator<Item = T>,
        owner: impl Fn(&T) -> &str,
        mut apply: impl FnMut(&mut R, T),
    ) -> usize {
        let mut dropped = 0;
        for row in rows {
            match self.records.get_mut(owner(&row)) {
                Some(record) => apply(record, row),
                None => dropped += 1,
            }
        }
        dropped
    }

    /// Consumes the aggregation, yielding `(uri, record)` in URI order.
    pub fn into_entries(self) -> impl Iterator<Item = (String, R)> {
        self.records.into_iter()
    }
}

/// Sorted values joined by `", "`, or [`EMPTY_DISPLAY`] when there are none.
pub fn joined(values: &BTreeSet<String>) -> String {
    if values.is_empty() {
        return EMPTY_DISPLAY.to_string();
    }
    values.iter().map(String::as_str).collect::<Vec<_>>().join(", ")
}

/// Keeps the first item for every key, preserving order.
pub fn dedup_by_key<T, K: Ord>(items: Vec<T>, key: impl Fn(&T) -> K) -> Vec<T> {
    let mut seen = BTreeSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(key(item)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default)]
    struct Counted {
        label: String,
        works: BTreeSet<String>,
    }

    fn seeded() -> Aggregation<Counted> {
        let mut agg = Aggregation::new();
        agg.seed("urn:a", || Counted {
            label: "A".into(),
            ..Default::default()
        });
        agg.seed("urn:b", || Counted {
            label: "B".into(),
            ..Default::default()
        });
        agg
    }

    #[test]
    fn test_first_seed_wins() {
        let mut agg = seeded();
        let added = agg.seed("urn:a", || Counted {
            label: "Other".into(),
            ..Default::default()
        });
        assert!(!added);
        assert_eq!(agg.len(), 2);
        let (_, first) = agg.into_entries().next().unwrap();
        assert_eq!(first.label, "A");
    }

    #[test]
    fn test_join_drops_unseeded_owners() {
        let mut agg = seeded();
        let rows = vec![
            ("urn:a", "w1"),
            ("urn:a", "w1"),
            ("urn:a", "w2"),
            ("urn:zzz", "w3"),
        ];
        let dropped = agg.join(rows, |r| r.0, |rec, r| {
            rec.works.insert(r.1.to_string());
        });

        assert_eq!(dropped, 1);
        let records: Vec<_> = agg.into_entries().collect();
        assert_eq!(records[0].1.works.len(), 2);
        assert!(records[1].1.works.is_empty());
    }

    #[test]
    fn test_joined_display() {
        assert_eq!(joined(&BTreeSet::new()), "-");
        let set: BTreeSet<String> = ["Fez", "Cairo", "Cordoba"].iter().map(|s| s.to_string()).collect();
        assert_eq!(joined(&set), "Cairo, Cordoba, Fez");
    }

    #[test]
    fn test_dedup_by_key_keeps_first() {
        let items = vec![("w1", "b"), ("w2", "a"), ("w1", "c")];
        let deduped = dedup_by_key(items, |i| i.0);
        assert_eq!(deduped, vec![("w1", "b"), ("w2", "a")]);
    }
}
