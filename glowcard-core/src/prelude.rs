//! One-stop import for presentation layers.
//!
//! ```
//! use glowcard_core::prelude::*;
//! ```

pub use glowcard_model::prelude::*;

pub use crate::carousel::{
    CarouselRegistry, DEFAULT_TRANSITION_LOCK, DragStep, DragTracker,
    WindowState,
};
pub use crate::catalog::{
    CatalogFetcher, CatalogOrigin, CatalogSnapshot, CatalogSource,
    CatalogSourceOptions, CatalogStore, HttpCatalogFetcher, PendingEdit,
    SampleCatalogOptions,
};
pub use crate::debounce::Debouncer;
pub use crate::error::{CatalogError, PaginationError};
pub use crate::pagination::{PageInput, Paginator, paginate};
pub use crate::query::{CatalogQueryBuilder, Facets, project};
pub use crate::session::{BrowseOptions, BrowseSession, BrowseView};
