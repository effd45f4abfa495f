//! Catalog loading feeding a browse session.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use glowcard_core::prelude::*;
use glowcard_core::Result;

/// Serves a canned JSON body, counting requests.
struct JsonFetcher {
    body: &'static str,
    calls: AtomicUsize,
}

impl JsonFetcher {
    fn new(body: &'static str) -> Self {
        Self {
            body,
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl CatalogFetcher for JsonFetcher {
    async fn fetch(&self) -> Result<Vec<ProfessionalRecord>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let parsed: CatalogResponse = serde_json::from_str(self.body)?;
        Ok(parsed.into_records())
    }
}

const ENVELOPE: &str = r#"{
  "data": [
    {"_id": 17, "name": " Lívia Rocha ", "specialty": "Nail Artist",
     "location": "Recife, PE", "rating": "4.7", "experience": 6},
    {"id": "a2", "name": "Bianca Melo", "specialty": "Lash Designer",
     "location": "Natal, RN", "rating": 4.9, "yearsExperience": 3, "order": 1},
    {"name": "Missing Id"}
  ]
}"#;

#[tokio::test]
async fn envelope_records_are_normalized_and_browsable() {
    let source = CatalogSource::new(JsonFetcher::new(ENVELOPE), CatalogSourceOptions::default());
    let snapshot = source.load().await;

    assert_eq!(snapshot.origin, CatalogOrigin::Live);
    assert_eq!(snapshot.len(), 2);
    assert_eq!(snapshot.records[0].id.as_str(), "17");
    assert_eq!(snapshot.records[0].name, "Lívia Rocha");
    assert_eq!(snapshot.records[0].years_experience, Some(6));

    let mut session =
        BrowseSession::with_records(BrowseOptions::default(), snapshot.records).unwrap();
    assert_eq!(session.view().items[0].name, "Bianca Melo");

    session.set_search("livia");
    assert_eq!(session.view().result_count, 0, "search is accent sensitive");
    session.set_search("lívia");
    assert_eq!(session.view().result_count, 1);
}

const MIXED_QUALITY: &str = r#"[
  {"id": "z", "name": "Zed", "order": 1.2, "rating": true},
  {"id": "a", "name": "Amy", "order": 1.9, "instagram": 5},
  {"id": 3.5, "name": "Bad Id"},
  "not a record"
]"#;

#[tokio::test]
async fn mistyped_fields_keep_the_live_catalog() {
    let source = CatalogSource::new(JsonFetcher::new(MIXED_QUALITY), CatalogSourceOptions::default());
    let snapshot = source.load().await;

    assert_eq!(snapshot.origin, CatalogOrigin::Live);
    assert!(snapshot.error.is_none());
    assert_eq!(snapshot.len(), 2);

    let session =
        BrowseSession::with_records(BrowseOptions::default(), snapshot.records).unwrap();
    let names: Vec<_> = session.view().items.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["Zed", "Amy"]);
    assert_eq!(session.view().items[0].rating, None);
}

#[tokio::test]
async fn malformed_body_falls_back_to_samples() {
    let fetcher = JsonFetcher::new("<html>maintenance</html>");
    let options = CatalogSourceOptions {
        pagination_enabled: true,
        ..Default::default()
    };
    let source = CatalogSource::new(fetcher, options);
    let snapshot = source.load().await;

    assert!(snapshot.is_fallback());
    assert!(snapshot.error.as_deref().unwrap().starts_with("Deserialization error"));

    let session = BrowseSession::with_records(BrowseOptions::default(), snapshot.records).unwrap();
    let view = session.view();
    assert_eq!(view.total_count, 24);
    assert_eq!(view.total_pages, 3);
    assert_eq!(view.items.len(), 9);
}

#[tokio::test]
async fn fallback_is_identical_across_sources() {
    let a = CatalogSource::new(JsonFetcher::new("[]"), CatalogSourceOptions::default());
    let b = CatalogSource::new(JsonFetcher::new("[]"), CatalogSourceOptions::default());
    assert_eq!(a.load().await.records, b.load().await.records);
}

#[tokio::test]
async fn stale_check_avoids_repeat_requests() {
    let source = CatalogSource::new(
        JsonFetcher::new(ENVELOPE),
        CatalogSourceOptions {
            cache_ttl: Duration::from_secs(3600),
            ..Default::default()
        },
    );
    source.load().await;
    assert!(source.refetch_if_stale().await.is_none());
    assert!(!source.is_stale());
    assert_eq!(source.fetcher().calls.load(Ordering::SeqCst), 1);

    source.invalidate();
    assert!(source.refetch_if_stale().await.is_some());
    assert_eq!(source.fetcher().calls.load(Ordering::SeqCst), 2);
}

#[tokio::test(start_paused = true)]
async fn debounced_search_reaches_the_session_once() {
    let source = CatalogSource::new(JsonFetcher::new(ENVELOPE), CatalogSourceOptions::default());
    let mut session =
        BrowseSession::with_records(BrowseOptions::default(), source.load().await.records)
            .unwrap();

    let (mut debouncer, mut settled) = Debouncer::new(Duration::from_millis(300));
    for term in ["b", "bi", "bia"] {
        debouncer.push(term.to_string());
        tokio::time::sleep(Duration::from_millis(50)).await;
    }

    let term = settled.recv().await.unwrap();
    assert!(session.set_search(term));
    assert_eq!(session.query().search, "bia");
    assert_eq!(session.view().result_count, 1);
    assert!(settled.try_recv().is_err());
}
