pub mod toml_config;

pub use toml_config::TomlConfig;

use crate::core::{CatalogLocation, ConfigProvider};
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_CATALOG_FILE: &str = "cups_limpio.json";
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const MAX_TIMEOUT_SECS: u64 = 300;

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "cups-catalog")]
#[command(about = "Lookup service over the Colombian CUPS procedure catalog")]
pub struct CliConfig {
    #[arg(long, help = "TOML configuration file; overrides the other flags")]
    pub config: Option<PathBuf>,

    #[arg(long, default_value = DEFAULT_CATALOG_FILE)]
    pub catalog_path: String,

    #[arg(long, help = "Fetch the catalog over HTTP(S) instead of reading a file")]
    pub catalog_url: Option<String>,

    #[arg(long, default_value = DEFAULT_HOST)]
    pub host: String,

    #[arg(long, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    #[arg(long, help = "Load the catalog before accepting requests")]
    pub eager_load: bool,

    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub request_timeout_secs: u64,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}

impl ConfigProvider for CliConfig {
    fn catalog_location(&self) -> CatalogLocation {
        match &self.catalog_url {
            Some(url) => CatalogLocation::Remote(url.clone()),
            None => CatalogLocation::File(PathBuf::from(&self.catalog_path)),
        }
    }

    fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    fn eager_load(&self) -> bool {
        self.eager_load
    }

    fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("host", &self.host)?;
        validation::validate_range("port", self.port, 1, u16::MAX)?;
        validation::validate_range("request_timeout_secs", self.request_timeout_secs, 1, MAX_TIMEOUT_SECS)?;

        match &self.catalog_url {
            Some(url) => validation::validate_url("catalog_url", url),
            None => validation::validate_path("catalog_path", &self.catalog_path),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_published_service() {
        let config = CliConfig::parse_from(["cups-catalog"]);
        assert_eq!(config.bind_address(), "0.0.0.0:8000");
        assert_eq!(
            config.catalog_location(),
            CatalogLocation::File(PathBuf::from("cups_limpio.json"))
        );
        assert!(!config.eager_load());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_catalog_url_takes_precedence() {
        let config = CliConfig::parse_from([
            "cups-catalog",
            "--catalog-url",
            "https://example.com/cups.json",
            "--port",
            "9000",
        ]);
        assert_eq!(
            config.catalog_location(),
            CatalogLocation::Remote("https://example.com/cups.json".to_string())
        );
        assert_eq!(config.bind_address(), "0.0.0.0:9000");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_catalog_path_needs_no_json_extension() {
        for path in ["catalogo/cups", "cups_2024.txt"] {
            let config = CliConfig::parse_from(["cups-catalog", "--catalog-path", path]);
            assert!(config.validate().is_ok(), "{path}");
        }
    }

    #[test]
    fn test_rejects_bad_values() {
        let config = CliConfig::parse_from(["cups-catalog", "--port", "0"]);
        assert!(config.validate().is_err());

        let config = CliConfig::parse_from(["cups-catalog", "--catalog-path", ""]);
        assert!(config.validate().is_err());

        let config = CliConfig::parse_from(["cups-catalog", "--catalog-url", "ftp://x/cups.json"]);
        assert!(config.validate().is_err());
    }
}
