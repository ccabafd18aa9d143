use crate::core::loader::CatalogLoader;
use crate::domain::ports::CatalogSource;
use std::sync::Arc;

/// Shared handle passed to every request handler.
#[derive(Clone)]
pub struct AppState {
    pub loader: Arc<CatalogLoader>,
}

impl AppState {
    pub fn new(source: Arc<dyn CatalogSource>) -> Self {
        Self {
            loader: Arc::new(CatalogLoader::new(source)),
        }
    }
}
