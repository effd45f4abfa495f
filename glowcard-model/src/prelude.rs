//! Flat re-export of the model surface for presentation layers.

pub use super::error::ModelError;
pub use super::ids::ProfessionalID;
pub use super::layout::{Breakpoint, BreakpointThresholds};
pub use super::paging::{CONTINUOUS_PAGE_CAP, Page, PageState};
pub use super::professional::Professional;
pub use super::query::{CatalogQuery, SortBy, SortOrder};
#[cfg(feature = "serde")]
pub use super::wire::{CatalogResponse, ProfessionalRecord};
