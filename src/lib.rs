pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod server;
pub mod utils;

pub use crate::config::{CliConfig, TomlConfig};
pub use crate::core::{catalog::Catalog, loader::CatalogLoader};
pub use crate::domain::model::{CatalogLocation, CupsRecord, ServiceInfo};
pub use crate::server::{router, AppState};
pub use crate::utils::error::{CatalogError, Result};
