use thiserror::Error;

/// Which lookup came back empty, with the value that was queried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotFoundKind {
    Code(String),
    Description(String),
}

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Catalog source '{source_name}' unavailable: {reason}")]
    CatalogUnavailable { source_name: String, reason: String },

    #[error("Catalog source '{source_name}' is malformed: {reason}")]
    CatalogMalformed { source_name: String, reason: String },

    #[error("{}", not_found_message(.0))]
    NotFound(NotFoundKind),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}' ('{value}'): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

fn not_found_message(kind: &NotFoundKind) -> String {
    match kind {
        NotFoundKind::Code(codigo) => format!("Código CUPS '{}' no encontrado", codigo),
        NotFoundKind::Description(descripcion) => format!(
            "No se encontró ningún código con la descripción que contenga '{}'",
            descripcion
        ),
    }
}

impl CatalogError {
    pub fn code_not_found(codigo: impl Into<String>) -> Self {
        Self::NotFound(NotFoundKind::Code(codigo.into()))
    }

    pub fn description_not_found(descripcion: impl Into<String>) -> Self {
        Self::NotFound(NotFoundKind::Description(descripcion.into()))
    }

    /// Catalog failures are server-side; a miss is the caller's problem.
    pub fn is_server_error(&self) -> bool {
        !matches!(self, Self::NotFound(_))
    }

    /// 面向 API 使用者的訊息（西班牙文）
    pub fn user_facing_message(&self) -> String {
        match self {
            Self::CatalogUnavailable { source_name, reason } if reason == MISSING_FILE => {
                format!("Archivo {} no encontrado", source_name)
            }
            Self::CatalogUnavailable { source_name, reason } => {
                format!("Catálogo {} no disponible: {}", source_name, reason)
            }
            Self::CatalogMalformed { reason, .. } => {
                format!("Error al leer el archivo JSON: {}", reason)
            }
            Self::NotFound(kind) => not_found_message(kind),
            other => other.to_string(),
        }
    }
}

/// Reason recorded when a file-backed catalog does not exist.
pub const MISSING_FILE: &str = "file not found";

pub type Result<T> = std::result::Result<T, CatalogError>;
