//! Catalog source: fetch once, fall back on failure, refetch on demand.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use chrono::{DateTime, Utc};
use glowcard_model::Professional;
use glowcard_model::wire::ProfessionalRecord;
use parking_lot::RwLock;
use tracing::{info, warn};

use super::fallback::{SampleCatalogOptions, sample_catalog};
use super::fetch::CatalogFetcher;
use super::store::{CatalogStore, PendingEdit};

/// Where the records of a snapshot came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CatalogOrigin {
    /// Nothing has been loaded yet.
    NotLoaded,
    /// Records returned by the catalog endpoint.
    Live,
    /// Sample records substituted for a failed or empty fetch.
    Fallback,
}

/// The record set as of the last completed load.
#[derive(Debug, Clone)]
pub struct CatalogSnapshot {
    pub records: Arc<Vec<Professional>>,
    pub origin: CatalogOrigin,
    /// Display string of the fetch error that triggered the fallback.
    pub error: Option<String>,
    pub loaded_at: Option<DateTime<Utc>>,
}

impl CatalogSnapshot {
    pub fn is_fallback(&self) -> bool {
        self.origin == CatalogOrigin::Fallback
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogSourceOptions {
    /// Selects the fallback size.
    pub pagination_enabled: bool,
    pub cache_ttl: Duration,
    pub samples: SampleCatalogOptions,
}

impl Default for CatalogSourceOptions {
    fn default() -> Self {
        Self {
            pagination_enabled: true,
            cache_ttl: Duration::from_secs(300),
            samples: SampleCatalogOptions::default(),
        }
    }
}

#[derive(Debug)]
struct SourceState {
    store: CatalogStore,
    origin: CatalogOrigin,
    error: Option<String>,
}

/// Clears the in-flight flag even if the load future is dropped mid-await.
struct InFlightGuard<'a>(&'a AtomicBool);

impl<'a> InFlightGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Supplies the unfiltered record set for a browsing session.
///
/// Loading never fails outward. A fetch error or an empty response is
/// replaced by the deterministic sample catalog and the error text is kept on
/// the snapshot for display. At most one request is in flight at a time.
#[derive(Debug)]
pub struct CatalogSource<F> {
    fetcher: F,
    options: CatalogSourceOptions,
    state: RwLock<SourceState>,
    in_flight: AtomicBool,
}

impl<F: CatalogFetcher> CatalogSource<F> {
    pub fn new(fetcher: F, options: CatalogSourceOptions) -> Self {
        Self {
            fetcher,
            state: RwLock::new(SourceState {
                store: CatalogStore::new(options.cache_ttl),
                origin: CatalogOrigin::NotLoaded,
                error: None,
            }),
            options,
            in_flight: AtomicBool::new(false),
        }
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    pub fn options(&self) -> &CatalogSourceOptions {
        &self.options
    }

    /// Load the catalog. If a load is already running, returns the current
    /// snapshot without waiting for it.
    pub async fn load(&self) -> CatalogSnapshot {
        match self.refetch().await {
            Some(snapshot) => snapshot,
            None => self.snapshot(),
        }
    }

    /// Re-run the load and swap in the new record set as a whole. Returns
    /// `None` without issuing a request when a load is already in flight.
    pub async fn refetch(&self) -> Option<CatalogSnapshot> {
        let Some(_guard) = InFlightGuard::acquire(&self.in_flight) else {
            tracing::debug!("catalog load already in flight; skipping refetch");
            return None;
        };

        let outcome = self.fetcher.fetch().await;
        let (records, origin, error) = match outcome {
            Ok(raw) => {
                let records = normalize(raw);
                if records.is_empty() {
                    warn!("catalog endpoint returned no records; serving sample catalog");
                    (self.fallback_records(), CatalogOrigin::Fallback, None)
                } else {
                    (records, CatalogOrigin::Live, None)
                }
            }
            Err(err) => {
                warn!(error = %err, "catalog fetch failed; serving sample catalog");
                (
                    self.fallback_records(),
                    CatalogOrigin::Fallback,
                    Some(err.to_string()),
                )
            }
        };

        let mut state = self.state.write();
        let dropped = state.store.replace_all(records, Utc::now());
        state.origin = origin;
        state.error = error;
        info!(
            records = state.store.len(),
            dropped,
            origin = ?origin,
            "catalog loaded"
        );
        Some(snapshot_of(&state))
    }

    /// Refetch only when the cached records are stale.
    pub async fn refetch_if_stale(&self) -> Option<CatalogSnapshot> {
        if self.is_stale() {
            self.refetch().await
        } else {
            None
        }
    }

    pub fn snapshot(&self) -> CatalogSnapshot {
        snapshot_of(&self.state.read())
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    pub fn is_stale(&self) -> bool {
        self.state.read().store.is_stale(Utc::now())
    }

    pub fn invalidate(&self) {
        self.state.write().store.invalidate();
    }

    pub fn apply_optimistic(&self, record: Professional) -> PendingEdit {
        self.state.write().store.apply_optimistic(record)
    }

    pub fn revert(&self, edit: PendingEdit) {
        self.state.write().store.revert(edit);
    }

    /// Run `f` against the backing store under a read lock.
    pub fn with_store<R>(&self, f: impl FnOnce(&CatalogStore) -> R) -> R {
        f(&self.state.read().store)
    }

    fn fallback_records(&self) -> Vec<Professional> {
        sample_catalog(self.options.pagination_enabled, &self.options.samples)
    }
}

fn snapshot_of(state: &SourceState) -> CatalogSnapshot {
    CatalogSnapshot {
        records: state.store.records(),
        origin: state.origin,
        error: state.error.clone(),
        loaded_at: state.store.fetched_at(),
    }
}

/// Wire records that cannot be normalized are skipped, not fatal.
fn normalize(raw: Vec<ProfessionalRecord>) -> Vec<Professional> {
    let total = raw.len();
    let records: Vec<Professional> = raw
        .into_iter()
        .filter_map(|record| match record.into_professional() {
            Ok(pro) => Some(pro),
            Err(err) => {
                warn!(error = %err, "dropping catalog record");
                None
            }
        })
        .collect();
    if records.len() < total {
        warn!(dropped = total - records.len(), total, "catalog records rejected at ingestion");
    }
    records
}

#[cfg(test)]
mod tests {
    use glowcard_model::wire::LooseText;
    use tokio::sync::Notify;

    use super::*;
    use crate::catalog::fetch::MockCatalogFetcher;
    use crate::error::{CatalogError, Result};

    fn record(id: &str, name: &str) -> ProfessionalRecord {
        ProfessionalRecord {
            id: Some(LooseText::Text(id.to_string())),
            name: Some(name.into()),
            ..Default::default()
        }
    }

    fn options(pagination_enabled: bool) -> CatalogSourceOptions {
        CatalogSourceOptions {
            pagination_enabled,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn live_records_are_kept_in_source_order() {
        let mut fetcher = MockCatalogFetcher::new();
        fetcher
            .expect_fetch()
            .times(1)
            .returning(|| Ok(vec![record("2", "Bia"), record("1", "Ana")]));

        let source = CatalogSource::new(fetcher, options(true));
        let snapshot = source.load().await;

        assert_eq!(snapshot.origin, CatalogOrigin::Live);
        assert!(snapshot.error.is_none());
        let names: Vec<_> = snapshot.records.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Bia", "Ana"]);
        assert!(!source.is_loading());
    }

    #[tokio::test]
    async fn empty_response_serves_paginated_fallback() {
        let mut fetcher = MockCatalogFetcher::new();
        fetcher.expect_fetch().returning(|| Ok(Vec::new()));

        let source = CatalogSource::new(fetcher, options(true));
        let snapshot = source.load().await;

        assert!(snapshot.is_fallback());
        assert_eq!(snapshot.len(), 24);
        assert!(snapshot.error.is_none());
    }

    #[tokio::test]
    async fn fetch_error_serves_fallback_and_keeps_message() {
        let mut fetcher = MockCatalogFetcher::new();
        fetcher
            .expect_fetch()
            .returning(|| Err(CatalogError::Status(503)));

        let source = CatalogSource::new(fetcher, options(false));
        let snapshot = source.load().await;

        assert!(snapshot.is_fallback());
        assert_eq!(snapshot.len(), 12);
        assert_eq!(
            snapshot.error.as_deref(),
            Some("Catalog endpoint returned status 503")
        );
    }

    #[tokio::test]
    async fn invalid_and_duplicate_records_are_dropped() {
        let mut fetcher = MockCatalogFetcher::new();
        fetcher.expect_fetch().returning(|| {
            Ok(vec![
                record("1", "Ana"),
                ProfessionalRecord {
                    name: Some("No Id".into()),
                    ..Default::default()
                },
                record("1", "Ana Again"),
                record("2", "Bia"),
            ])
        });

        let source = CatalogSource::new(fetcher, options(true));
        let snapshot = source.load().await;

        assert_eq!(snapshot.origin, CatalogOrigin::Live);
        assert_eq!(snapshot.len(), 2);
    }

    #[tokio::test]
    async fn refetch_replaces_the_record_set() {
        let mut fetcher = MockCatalogFetcher::new();
        let mut seq = mockall::Sequence::new();
        fetcher
            .expect_fetch()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| Err(CatalogError::Internal("offline".into())));
        fetcher
            .expect_fetch()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| Ok(vec![record("1", "Ana")]));

        let source = CatalogSource::new(fetcher, options(true));
        assert!(source.load().await.is_fallback());

        let snapshot = source.refetch().await.unwrap();
        assert_eq!(snapshot.origin, CatalogOrigin::Live);
        assert_eq!(snapshot.len(), 1);
        assert!(snapshot.error.is_none());
        assert_eq!(source.snapshot().len(), 1);
    }

    #[tokio::test]
    async fn fresh_store_skips_refetch_until_invalidated() {
        let mut fetcher = MockCatalogFetcher::new();
        fetcher
            .expect_fetch()
            .times(2)
            .returning(|| Ok(vec![record("1", "Ana")]));

        let source = CatalogSource::new(fetcher, options(true));
        assert!(source.refetch_if_stale().await.is_some(), "never fetched");
        assert!(source.refetch_if_stale().await.is_none());

        source.invalidate();
        assert!(source.refetch_if_stale().await.is_some());
    }

    struct GatedFetcher {
        gate: Arc<Notify>,
    }

    #[async_trait::async_trait]
    impl CatalogFetcher for GatedFetcher {
        async fn fetch(&self) -> Result<Vec<ProfessionalRecord>> {
            self.gate.notified().await;
            Ok(vec![record("1", "Ana")])
        }
    }

    #[tokio::test]
    async fn concurrent_refetch_is_ignored_while_loading() {
        let gate = Arc::new(Notify::new());
        let source = Arc::new(CatalogSource::new(
            GatedFetcher { gate: Arc::clone(&gate) },
            options(true),
        ));

        let background = Arc::clone(&source);
        let first = tokio::spawn(async move { background.refetch().await });

        while !source.is_loading() {
            tokio::task::yield_now().await;
        }
        assert!(source.refetch().await.is_none());
        assert_eq!(source.snapshot().origin, CatalogOrigin::NotLoaded);

        gate.notify_one();
        let snapshot = first.await.unwrap().unwrap();
        assert_eq!(snapshot.origin, CatalogOrigin::Live);
        assert!(!source.is_loading());
    }

    #[tokio::test]
    async fn optimistic_edits_go_through_the_store() {
        let mut fetcher = MockCatalogFetcher::new();
        fetcher
            .expect_fetch()
            .returning(|| Ok(vec![record("1", "Ana")]));

        let source = CatalogSource::new(fetcher, options(true));
        source.load().await;

        let mut edited = source.snapshot().records[0].clone();
        edited.name = "Ana Paula".into();
        let edit = source.apply_optimistic(edited);
        assert_eq!(source.snapshot().records[0].name, "Ana Paula");

        source.revert(edit);
        assert_eq!(source.snapshot().records[0].name, "Ana");
        assert_eq!(source.with_store(|store| store.len()), 1);
    }
}
