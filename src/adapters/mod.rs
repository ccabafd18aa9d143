// Adapters layer: concrete catalog sources.

pub mod file;
pub mod remote;

pub use file::LocalCatalogFile;
pub use remote::RemoteCatalog;

use crate::domain::model::CatalogLocation;
use crate::domain::ports::CatalogSource;
use crate::utils::error::Result;
use std::sync::Arc;
use std::time::Duration;

/// Pick the adapter matching a configured location.
pub fn source_for(location: &CatalogLocation, timeout: Duration) -> Result<Arc<dyn CatalogSource>> {
    Ok(match location {
        CatalogLocation::File(path) => Arc::new(LocalCatalogFile::new(path.clone())),
        CatalogLocation::Remote(url) => Arc::new(RemoteCatalog::new(url.clone(), timeout)?),
    })
}
