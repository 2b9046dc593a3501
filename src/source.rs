//! Catalog fetch seam
//!
//! `CatalogSource` abstracts where the course catalog comes from so the
//! accessor can be tested without a network. The production implementation
//! is one HTTP GET against the published Apps Script endpoint.

use crate::config::CatalogConfig;
use crate::models::CourseCatalog;
use crate::{CursosError, Result};
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, info};

/// Source of course catalog snapshots
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetch a complete catalog snapshot
    async fn fetch(&self) -> Result<CourseCatalog>;
}

/// HTTP-backed catalog source
pub struct HttpCatalogSource {
    client: reqwest::Client,
    endpoint_url: String,
}

impl HttpCatalogSource {
    /// Create a source fetching from `endpoint_url` with an explicit request
    /// timeout. No retries; the caller decides whether to retry.
    pub fn new(endpoint_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| CursosError::transport(format!("Failed to build HTTP client: {err}")))?;

        Ok(Self {
            client,
            endpoint_url: endpoint_url.into(),
        })
    }

    /// Create a source from the catalog section of the configuration
    pub fn from_config(config: &CatalogConfig) -> Result<Self> {
        Self::new(
            config.endpoint_url.clone(),
            Duration::from_secs(u64::from(config.timeout_seconds)),
        )
    }
}

#[async_trait]
impl CatalogSource for HttpCatalogSource {
    async fn fetch(&self) -> Result<CourseCatalog> {
        debug!("Fetching course catalog from {}", self.endpoint_url);

        let response = self.client.get(&self.endpoint_url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CursosError::http_status(status.as_u16()));
        }

        let catalog: CourseCatalog = response.json().await?;
        info!(
            "Fetched catalog: {} locations, {} courses",
            catalog.len(),
            crate::models::total_course_count(&catalog)
        );
        Ok(catalog)
    }
}
