use crate::domain::model::{CupsRecord, ServiceInfo};
use crate::server::error::ApiResult;
use crate::server::state::AppState;
use axum::{
    extract::{rejection::PathRejection, Path, State},
    Json,
};

/// `GET /`
pub async fn service_info(State(state): State<AppState>) -> Json<ServiceInfo> {
    Json(ServiceInfo::new(state.loader.status()))
}

/// `GET /cups`
pub async fn list_cups(State(state): State<AppState>) -> ApiResult<Json<Vec<CupsRecord>>> {
    let catalog = state.loader.catalog().await?;
    Ok(Json(catalog.records().to_vec()))
}

/// `GET /cups/codigo/{codigo}`
pub async fn cups_by_code(
    State(state): State<AppState>,
    codigo: Result<Path<String>, PathRejection>,
) -> ApiResult<Json<CupsRecord>> {
    let Path(codigo) = codigo?;
    let codigo = codigo.trim();
    let catalog = state.loader.catalog().await?;
    let record = catalog.find_by_code(codigo)?;
    tracing::debug!("Code lookup '{}' -> {}", codigo, record.code_plain);
    Ok(Json(record.clone()))
}

/// `GET /cups/descripcion/{descripcion}`
pub async fn cups_by_description(
    State(state): State<AppState>,
    descripcion: Result<Path<String>, PathRejection>,
) -> ApiResult<Json<CupsRecord>> {
    let Path(descripcion) = descripcion?;
    let descripcion = descripcion.trim();
    let catalog = state.loader.catalog().await?;
    let record = catalog.find_by_description(descripcion)?;
    tracing::debug!("Description lookup '{}' -> {}", descripcion, record.code_plain);
    Ok(Json(record.clone()))
}
