//! # glowcard core
//!
//! Browsing engine for the glowcard professional catalog: the logic that turns
//! a raw list of professional profiles into the cards a visitor sees.
//!
//! ## Overview
//!
//! Data flows through four stages:
//!
//! - [`catalog`]: loads the record set once per session through a
//!   [`catalog::CatalogFetcher`], falling back to a deterministic sample set
//!   when the endpoint fails or returns nothing
//! - [`query`]: [`query::project`] filters and sorts the records for a
//!   [`CatalogQuery`] with fully determined tie-breaks
//! - [`pagination`]: slices the projection into pages, or caps it for
//!   continuous layouts
//! - [`carousel`]: tracks focus and the visible card group per viewport class
//!
//! [`session::BrowseSession`] wires the stages together and enforces the reset
//! rules a UI relies on (query change → page 1 → carousel back to the start).
//! [`debounce::Debouncer`] settles keystrokes before they reach the session.
//!
//! ## Examples
//!
//! ```
//! use glowcard_core::prelude::*;
//!
//! let records = vec![
//!     Professional::new(ProfessionalID::new("1").unwrap(), "Bea")
//!         .with_specialty("Lashes")
//!         .with_rating(4.8),
//!     Professional::new(ProfessionalID::new("2").unwrap(), "Ana")
//!         .with_specialty("Brows")
//!         .with_rating(4.9),
//! ];
//!
//! let query = CatalogQueryBuilder::new()
//!     .sort_by(SortBy::Rating, SortOrder::Descending)
//!     .build();
//! let projection = project(&records, &query);
//! assert_eq!(projection[0].name, "Ana");
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(missing_docs)]

/// Pointer-driven and keyboard-driven carousel windowing
pub mod carousel;
/// Record loading, fallback data and the id-keyed record store
pub mod catalog;
/// Cancel-and-reschedule delivery of settled input
pub mod debounce;
/// Error types for the catalog boundary
pub mod error;
/// Page slicing and page-number input handling
pub mod pagination;
/// Commonly used types for presentation layers
pub mod prelude;
/// Filtering, sorting and facet extraction
pub mod query;
/// Browsing session state shared with a UI layer
pub mod session;

pub use error::{CatalogError, PaginationError, Result};
pub use glowcard_model::{
    Breakpoint, BreakpointThresholds, CONTINUOUS_PAGE_CAP, CatalogQuery,
    ModelError, Page, PageState, Professional, ProfessionalID, SortBy,
    SortOrder,
};
