//! Catalog bounded context: where the unfiltered record set comes from.
//!
//! [`CatalogSource`] is the only entry point a session needs. It wraps a
//! [`CatalogFetcher`] (the HTTP adapter in production), normalizes wire
//! records at the ingestion boundary, keeps the result in a [`CatalogStore`],
//! and substitutes the deterministic sample catalog when live data is
//! unavailable.

pub mod fallback;
pub mod fetch;
pub mod source;
pub mod store;

pub use fallback::{SampleCatalogOptions, sample_catalog};
pub use fetch::{CatalogFetcher, HttpCatalogFetcher};
pub use source::{CatalogOrigin, CatalogSnapshot, CatalogSource, CatalogSourceOptions};
pub use store::{CatalogStore, PendingEdit};
