//! Fetcher seam and the reqwest-backed adapter.

use std::time::Duration;

use async_trait::async_trait;
use glowcard_model::wire::{CatalogResponse, ProfessionalRecord};
use reqwest::{Client, header};
use url::Url;

use crate::error::{CatalogError, Result};

/// Supplies the raw, unnormalized catalog.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogFetcher: Send + Sync {
    async fn fetch(&self) -> Result<Vec<ProfessionalRecord>>;
}

/// Fetches the catalog from `{base_url}/api/professionals`.
#[derive(Debug, Clone)]
pub struct HttpCatalogFetcher {
    client: Client,
    endpoint: Url,
}

impl HttpCatalogFetcher {
    pub const CATALOG_PATH: &'static str = "api/professionals";

    /// Build a fetcher with its own client. A base URL without a scheme is
    /// treated as plain `http://`.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: Self::endpoint_for(base_url)?,
        })
    }

    /// Reuse an existing client, e.g. one shared with other services.
    pub fn with_client(client: Client, base_url: &str) -> Result<Self> {
        Ok(Self {
            client,
            endpoint: Self::endpoint_for(base_url)?,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    fn endpoint_for(base_url: &str) -> Result<Url> {
        let trimmed = base_url.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Err(CatalogError::InvalidEndpoint(
                "catalog base url is empty".to_string(),
            ));
        }
        let with_scheme = if trimmed.starts_with("http://")
            || trimmed.starts_with("https://")
        {
            trimmed.to_string()
        } else {
            format!("http://{trimmed}")
        };
        // The trailing slash makes `join` append instead of replacing the
        // last path segment.
        let base = Url::parse(&format!("{with_scheme}/"))?;
        Ok(base.join(Self::CATALOG_PATH)?)
    }
}

#[async_trait]
impl CatalogFetcher for HttpCatalogFetcher {
    async fn fetch(&self) -> Result<Vec<ProfessionalRecord>> {
        tracing::debug!(endpoint = %self.endpoint, "fetching catalog");

        let response = self
            .client
            .get(self.endpoint.clone())
            .header(header::ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        let parsed: CatalogResponse = serde_json::from_slice(&body)?;
        Ok(parsed.into_records())
    }
}
