use crate::core::catalog::Catalog;
use crate::domain::model::CatalogStatus;
use crate::domain::ports::CatalogSource;
use crate::utils::error::Result;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::OnceCell;

#[derive(Debug)]
struct Loaded {
    catalog: Arc<Catalog>,
    loaded_at: DateTime<Utc>,
}

/// Loads the catalog from its source at most once and shares the result.
///
/// Concurrent first callers wait on the same initialization. A failed load
/// is not remembered, so a later call tries the source again.
pub struct CatalogLoader {
    source: Arc<dyn CatalogSource>,
    cell: OnceCell<Loaded>,
}

impl CatalogLoader {
    pub fn new(source: Arc<dyn CatalogSource>) -> Self {
        Self {
            source,
            cell: OnceCell::new(),
        }
    }

    pub async fn catalog(&self) -> Result<Arc<Catalog>> {
        let loaded = self.cell.get_or_try_init(|| self.load()).await?;
        Ok(Arc::clone(&loaded.catalog))
    }

    /// Force the load, typically at startup.
    pub async fn warm(&self) -> Result<usize> {
        Ok(self.catalog().await?.len())
    }

    pub fn is_loaded(&self) -> bool {
        self.cell.initialized()
    }

    /// Snapshot of the load state that never triggers a load.
    pub fn status(&self) -> CatalogStatus {
        let loaded = self.cell.get();
        CatalogStatus {
            source: self.source.describe(),
            loaded: loaded.is_some(),
            records: loaded.map(|l| l.catalog.len()),
            loaded_at: loaded.map(|l| l.loaded_at),
        }
    }

    async fn load(&self) -> Result<Loaded> {
        let source_name = self.source.describe();
        let started = Instant::now();
        tracing::info!("Loading CUPS catalog from {}", source_name);

        let bytes = self.source.fetch().await.inspect_err(|e| {
            tracing::error!("❌ Catalog source {} unavailable: {}", source_name, e);
        })?;

        let catalog = Catalog::from_json_slice(&source_name, &bytes).inspect_err(|e| {
            tracing::error!("❌ Catalog source {} malformed: {}", source_name, e);
        })?;

        tracing::info!(
            "✅ Loaded {} CUPS records from {} in {:?}",
            catalog.len(),
            source_name,
            started.elapsed()
        );
        if catalog.is_empty() {
            tracing::warn!("Catalog {} contains no records", source_name);
        }

        Ok(Loaded {
            catalog: Arc::new(catalog),
            loaded_at: Utc::now(),
        })
    }
}
