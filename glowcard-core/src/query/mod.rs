pub mod builder;
pub mod engine;
pub mod facets;
pub mod filtering;
pub mod sorting;

pub use builder::{CatalogQueryBuilder, search_query, top_rated};
pub use engine::project;
pub use facets::{FacetCount, Facets};
pub use filtering::{fold_case, matches_query, query_fingerprint};
pub use sorting::{collate, compare_professionals, sort_professionals};
