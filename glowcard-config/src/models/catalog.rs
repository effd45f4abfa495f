use std::time::Duration;

use glowcard_core::catalog::HttpCatalogFetcher;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::ConfigLoadError;

/// Where the catalog lives and how long a fetched copy stays fresh.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Origin serving `/api/professionals`. A missing scheme means `http://`.
    pub base_url: String,
    /// Whole-request timeout for the catalog fetch.
    pub timeout_ms: u64,
    /// Age after which a loaded catalog counts as stale.
    pub cache_ttl_secs: u64,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000".to_string(),
            timeout_ms: 10_000,
            cache_ttl_secs: 300,
        }
    }
}

impl CatalogConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }

    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        if self.timeout_ms == 0 {
            return Err(ConfigLoadError::ZeroTimeout);
        }
        let trimmed = self.base_url.trim();
        let candidate = if trimmed.contains("://") {
            trimmed.to_string()
        } else {
            format!("http://{trimmed}")
        };
        Url::parse(&candidate).map_err(|source| {
            ConfigLoadError::InvalidBaseUrl {
                url: self.base_url.clone(),
                source,
            }
        })?;
        Ok(())
    }

    pub fn http_fetcher(&self) -> glowcard_core::Result<HttpCatalogFetcher> {
        HttpCatalogFetcher::new(&self.base_url, self.timeout())
    }
}
