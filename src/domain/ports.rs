use crate::domain::model::CatalogLocation;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// A place the raw catalog document can be read from.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Human readable name used in logs and error messages.
    fn describe(&self) -> String;

    /// Read the raw document. Missing or unreachable sources map to
    /// `CatalogError::CatalogUnavailable`.
    async fn fetch(&self) -> Result<Vec<u8>>;
}

pub trait ConfigProvider: Send + Sync {
    fn catalog_location(&self) -> CatalogLocation;
    fn bind_address(&self) -> String;
    fn eager_load(&self) -> bool;
    fn request_timeout(&self) -> Duration;
}
