use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// One entry of the CUPS catalog.
///
/// Field names on the wire follow the published catalog file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CupsRecord {
    #[serde(rename = "codigo_sin_puntos")]
    pub code_plain: String,
    #[serde(rename = "codigo_con_puntos")]
    pub code_dotted: String,
    #[serde(rename = "descripcion")]
    pub description: String,
    #[serde(rename = "trazabilidad")]
    pub traceability: String,
}

/// Where the catalog is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogLocation {
    File(PathBuf),
    Remote(String),
}

impl fmt::Display for CatalogLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Remote(url) => write!(f, "{}", url),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CatalogStatus {
    pub source: String,
    pub loaded: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub records: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loaded_at: Option<DateTime<Utc>>,
}

/// Route templates advertised at `GET /`, serialized in declaration order.
#[derive(Debug, Clone, Serialize)]
pub struct Endpoints {
    pub listado_paginado: &'static str,
    pub buscar_por_codigo: &'static str,
    pub buscar_por_descripcion: &'static str,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            listado_paginado: "/cups",
            buscar_por_codigo: "/cups/codigo/{codigo}",
            buscar_por_descripcion: "/cups/descripcion/{descripcion}",
        }
    }
}

/// Payload of `GET /`.
#[derive(Debug, Clone, Serialize)]
pub struct ServiceInfo {
    pub message: String,
    pub version: String,
    pub endpoints: Endpoints,
    pub catalog: CatalogStatus,
}

impl ServiceInfo {
    pub fn new(catalog: CatalogStatus) -> Self {
        Self {
            message: "API CUPS Colombia - Versión Simplificada".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            endpoints: Endpoints::default(),
            catalog,
        }
    }
}
