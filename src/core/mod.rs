pub mod catalog;
pub mod loader;

pub use crate::domain::model::{CatalogLocation, CupsRecord};
pub use crate::domain::ports::{CatalogSource, ConfigProvider};
pub use crate::utils::error::Result;
