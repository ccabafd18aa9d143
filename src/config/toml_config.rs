use crate::config::{DEFAULT_HOST, DEFAULT_PORT, DEFAULT_TIMEOUT_SECS, MAX_TIMEOUT_SECS};
use crate::core::{CatalogLocation, ConfigProvider};
use crate::utils::error::{CatalogError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub server: ServerConfig,
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: Option<String>,
    pub port: Option<u16>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    pub path: Option<String>,
    pub url: Option<String>,
    pub eager_load: Option<bool>,
    pub request_timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub json: Option<bool>,
}

fn env_placeholder() -> &'static Regex {
    static PLACEHOLDER: OnceLock<Regex> = OnceLock::new();
    PLACEHOLDER.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("valid placeholder regex"))
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| CatalogError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${CUPS_CATALOG_URL})，未定義者保留原樣
    fn substitute_env_vars(content: &str) -> String {
        env_placeholder()
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn host(&self) -> &str {
        self.server.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    pub fn port(&self) -> u16 {
        self.server.port.unwrap_or(DEFAULT_PORT)
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.level.as_deref()
    }

    pub fn json_logs(&self) -> bool {
        self.logging.json.unwrap_or(false)
    }

    fn timeout_secs(&self) -> u64 {
        self.catalog.request_timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS)
    }
}

impl ConfigProvider for TomlConfig {
    fn catalog_location(&self) -> CatalogLocation {
        match (&self.catalog.url, &self.catalog.path) {
            (Some(url), _) => CatalogLocation::Remote(url.clone()),
            (None, Some(path)) => CatalogLocation::File(PathBuf::from(path)),
            // validate() rejects this; fall back to the conventional file name
            (None, None) => CatalogLocation::File(PathBuf::from(crate::config::DEFAULT_CATALOG_FILE)),
        }
    }

    fn bind_address(&self) -> String {
        format!("{}:{}", self.host(), self.port())
    }

    fn eager_load(&self) -> bool {
        self.catalog.eager_load.unwrap_or(false)
    }

    fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("server.host", self.host())?;
        validation::validate_range("server.port", self.port(), 1, u16::MAX)?;
        validation::validate_range(
            "catalog.request_timeout_secs",
            self.timeout_secs(),
            1,
            MAX_TIMEOUT_SECS,
        )?;
        validation::validate_exactly_one("catalog.path", &self.catalog.path, "catalog.url", &self.catalog.url)?;

        if let Some(url) = &self.catalog.url {
            validation::validate_url("catalog.url", url)?;
        }
        if let Some(path) = &self.catalog.path {
            validation::validate_path("catalog.path", path)?;
        }
        if let Some(level) = self.log_level() {
            if !["trace", "debug", "info", "warn", "error"].contains(&level) {
                return Err(CatalogError::InvalidConfigValueError {
                    field: "logging.level".to_string(),
                    value: level.to_string(),
                    reason: "Valid levels: trace, debug, info, warn, error".to_string(),
                });
            }
        }

        Ok(())
    }
}
