//! Configuration for glowcard browsing sessions.
//!
//! [`BrowseConfig`] gathers every tunable of the browsing engine (page size,
//! debounce and transition timings, breakpoints, catalog endpoint) in one
//! serde model that loads from TOML or JSON and converts into the option
//! structs of `glowcard-core`. [`telemetry::init_tracing`] installs the
//! tracing subscriber host applications use.

#![allow(missing_docs)]

pub mod error;
pub mod models;
pub mod telemetry;

pub use error::ConfigLoadError;
pub use models::browse::{
    BrowseConfig, BrowseConfigSource, CONFIG_JSON_ENV, CONFIG_PATH_ENV,
};
pub use models::catalog::CatalogConfig;
