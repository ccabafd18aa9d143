use crate::domain::ports::CatalogSource;
use crate::utils::error::{CatalogError, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// Catalog published as a JSON document behind an HTTP(S) URL.
#[derive(Debug, Clone)]
pub struct RemoteCatalog {
    url: String,
    client: Client,
}

impl RemoteCatalog {
    pub fn new(url: String, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| CatalogError::ConfigError {
                message: format!("cannot build HTTP client: {}", e),
            })?;
        Ok(Self { url, client })
    }

    fn unavailable(&self, reason: impl Into<String>) -> CatalogError {
        CatalogError::CatalogUnavailable {
            source_name: self.url.clone(),
            reason: reason.into(),
        }
    }
}

#[async_trait]
impl CatalogSource for RemoteCatalog {
    fn describe(&self) -> String {
        self.url.clone()
    }

    async fn fetch(&self) -> Result<Vec<u8>> {
        tracing::debug!("Making catalog request to: {}", self.url);
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| self.unavailable(e.to_string()))?;

        tracing::debug!("Catalog response status: {}", response.status());
        if !response.status().is_success() {
            return Err(self.unavailable(format!("HTTP {}", response.status())));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| self.unavailable(e.to_string()))?;
        Ok(body.to_vec())
    }
}
