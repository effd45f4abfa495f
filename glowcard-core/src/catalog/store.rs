//! In-memory catalog cache.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};
use glowcard_model::{Professional, ProfessionalID};

/// Previous state of a record touched by [`CatalogStore::apply_optimistic`].
///
/// Hand it back to [`CatalogStore::revert`] if the remote write fails.
#[derive(Debug, Clone, PartialEq)]
#[must_use = "an optimistic edit cannot be reverted once its PendingEdit is dropped"]
pub struct PendingEdit {
    id: ProfessionalID,
    previous: Option<Professional>,
}

impl PendingEdit {
    pub fn id(&self) -> &ProfessionalID {
        &self.id
    }

    /// `true` when the edit inserted a record that did not exist before.
    pub fn was_insert(&self) -> bool {
        self.previous.is_none()
    }
}

/// Record set in source order with an id index and freshness tracking.
///
/// Readers take cheap [`Arc`] snapshots through [`CatalogStore::records`];
/// writers copy on write, so a snapshot never changes underneath its holder.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    records: Arc<Vec<Professional>>,
    index: HashMap<ProfessionalID, usize>,
    fetched_at: Option<DateTime<Utc>>,
    invalidated: bool,
    ttl: Duration,
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::new(Duration::from_secs(300))
    }
}

impl CatalogStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            records: Arc::new(Vec::new()),
            index: HashMap::new(),
            fetched_at: None,
            invalidated: false,
            ttl,
        }
    }

    /// Replace every record at once. Later duplicates of an id are dropped;
    /// returns how many were dropped.
    pub fn replace_all(
        &mut self,
        records: Vec<Professional>,
        now: DateTime<Utc>,
    ) -> usize {
        let mut kept = Vec::with_capacity(records.len());
        let mut index = HashMap::with_capacity(records.len());
        let mut dropped = 0;

        for record in records {
            if index.contains_key(&record.id) {
                tracing::warn!(id = %record.id, "dropping duplicate catalog record");
                dropped += 1;
                continue;
            }
            index.insert(record.id.clone(), kept.len());
            kept.push(record);
        }

        self.records = Arc::new(kept);
        self.index = index;
        self.fetched_at = Some(now);
        self.invalidated = false;
        dropped
    }

    pub fn records(&self) -> Arc<Vec<Professional>> {
        Arc::clone(&self.records)
    }

    pub fn get(&self, id: &ProfessionalID) -> Option<&Professional> {
        self.index.get(id).and_then(|&i| self.records.get(i))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn fetched_at(&self) -> Option<DateTime<Utc>> {
        self.fetched_at
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn invalidate(&mut self) {
        self.invalidated = true;
    }

    /// Stale when invalidated, never filled, or older than the ttl.
    pub fn is_stale(&self, now: DateTime<Utc>) -> bool {
        if self.invalidated {
            return true;
        }
        let Some(fetched_at) = self.fetched_at else {
            return true;
        };
        match TimeDelta::from_std(self.ttl) {
            Ok(ttl) => now.signed_duration_since(fetched_at) >= ttl,
            // A ttl too large for chrono never expires.
            Err(_) => false,
        }
    }

    /// Insert or overwrite a record ahead of remote confirmation.
    pub fn apply_optimistic(&mut self, record: Professional) -> PendingEdit {
        let id = record.id.clone();
        let records = Arc::make_mut(&mut self.records);
        let previous = match self.index.get(&id) {
            Some(&i) => Some(std::mem::replace(&mut records[i], record)),
            None => {
                self.index.insert(id.clone(), records.len());
                records.push(record);
                None
            }
        };
        PendingEdit { id, previous }
    }

    /// Undo an optimistic edit: restore the previous value, or remove the
    /// record if the edit inserted it.
    pub fn revert(&mut self, edit: PendingEdit) {
        match edit.previous {
            Some(previous) => {
                if let Some(&i) = self.index.get(&edit.id) {
                    Arc::make_mut(&mut self.records)[i] = previous;
                } else {
                    self.index.insert(edit.id, self.records.len());
                    Arc::make_mut(&mut self.records).push(previous);
                }
            }
            None => {
                self.remove(&edit.id);
            }
        }
    }

    pub fn remove(&mut self, id: &ProfessionalID) -> Option<Professional> {
        let position = self.index.remove(id)?;
        let removed = Arc::make_mut(&mut self.records).remove(position);
        for slot in self.index.values_mut() {
            if *slot > position {
                *slot -= 1;
            }
        }
        Some(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pro(id: &str, name: &str) -> Professional {
        Professional::new(ProfessionalID::new(id).unwrap(), name)
    }

    fn id(raw: &str) -> ProfessionalID {
        ProfessionalID::new(raw).unwrap()
    }

    #[test]
    fn replace_all_keeps_source_order_and_drops_duplicates() {
        let mut store = CatalogStore::default();
        let dropped = store.replace_all(
            vec![pro("b", "Bia"), pro("a", "Ana"), pro("b", "Beatriz")],
            Utc::now(),
        );

        assert_eq!(dropped, 1);
        let names: Vec<_> =
            store.records().iter().map(|p| p.name.clone()).collect();
        assert_eq!(names, ["Bia", "Ana"]);
        assert_eq!(store.get(&id("b")).unwrap().name, "Bia");
    }

    #[test]
    fn staleness_tracks_ttl_and_invalidation() {
        let mut store = CatalogStore::new(Duration::from_secs(60));
        let t0 = Utc::now();
        assert!(store.is_stale(t0), "never fetched");

        store.replace_all(vec![pro("a", "Ana")], t0);
        assert!(!store.is_stale(t0 + TimeDelta::seconds(59)));
        assert!(store.is_stale(t0 + TimeDelta::seconds(60)));

        store.invalidate();
        assert!(store.is_stale(t0));

        store.replace_all(vec![pro("a", "Ana")], t0);
        assert!(!store.is_stale(t0));
    }

    #[test]
    fn optimistic_update_reverts_to_previous_value() {
        let mut store = CatalogStore::default();
        store.replace_all(vec![pro("a", "Ana"), pro("b", "Bia")], Utc::now());
        let before = store.records();

        let edit = store.apply_optimistic(pro("a", "Ana Paula"));
        assert!(!edit.was_insert());
        assert_eq!(store.get(&id("a")).unwrap().name, "Ana Paula");
        // Snapshots taken earlier are untouched.
        assert_eq!(before[0].name, "Ana");

        store.revert(edit);
        assert_eq!(store.get(&id("a")).unwrap().name, "Ana");
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn reverting_an_insert_removes_the_record() {
        let mut store = CatalogStore::default();
        store.replace_all(vec![pro("a", "Ana")], Utc::now());

        let edit = store.apply_optimistic(pro("c", "Cris"));
        assert!(edit.was_insert());
        assert_eq!(store.len(), 2);

        store.revert(edit);
        assert_eq!(store.len(), 1);
        assert!(store.get(&id("c")).is_none());
    }

    #[test]
    fn remove_reindexes_following_records() {
        let mut store = CatalogStore::default();
        store.replace_all(
            vec![pro("a", "Ana"), pro("b", "Bia"), pro("c", "Cris")],
            Utc::now(),
        );

        let removed = store.remove(&id("a")).unwrap();
        assert_eq!(removed.name, "Ana");
        assert_eq!(store.get(&id("c")).unwrap().name, "Cris");
        assert_eq!(store.get(&id("b")).unwrap().name, "Bia");
        assert!(store.remove(&id("a")).is_none());
    }
}
