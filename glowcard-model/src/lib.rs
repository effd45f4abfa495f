//! Core data model definitions shared across glowcard crates.
//!
//! Everything here is plain data: the closed [`Professional`] record the query
//! engine works on, the query/page descriptors a presentation layer hands to
//! the engine, and the breakpoint classes the carousel windower is keyed by.
//! With the `serde` feature the permissive wire DTO [`wire::ProfessionalRecord`]
//! is also available for ingestion.
#![allow(missing_docs)]

pub mod error;
pub mod ids;
pub mod layout;
pub mod paging;
pub mod prelude;
pub mod professional;
pub mod query;
#[cfg(feature = "serde")]
pub mod wire;

pub use error::ModelError;
pub use ids::ProfessionalID;
pub use layout::{Breakpoint, BreakpointThresholds};
pub use paging::{CONTINUOUS_PAGE_CAP, Page, PageState};
pub use professional::Professional;
pub use query::{CatalogQuery, SortBy, SortOrder};
