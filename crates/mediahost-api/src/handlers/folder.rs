//! Tenant folder handlers.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use mediahost_core::error::AppError;
use mediahost_entity::folder::Folder;

use crate::dto::{CreateFolderRequest, DeleteFolderResponse};
use crate::error::ApiError;
use crate::extractors::AuthTenant;
use crate::state::AppState;

/// GET /api/folders
pub async fn list_folders(
    State(state): State<AppState>,
    tenant: AuthTenant,
) -> Result<Json<Vec<Folder>>, ApiError> {
    let folders = state.folder_service.list(&tenant).await?;
    Ok(Json(folders))
}

/// POST /api/folders
pub async fn create_folder(
    State(state): State<AppState>,
    tenant: AuthTenant,
    body: Result<Json<CreateFolderRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Folder>), ApiError> {
    let Json(req) = body.map_err(|rejection| {
        AppError::validation("Folder name is required").with_details(rejection.body_text())
    })?;
    let name = req
        .name
        .ok_or_else(|| AppError::validation("Folder name is required"))?;
    let created = state.folder_service.create(&tenant, &name).await?;
    Ok((StatusCode::CREATED, Json(created.folder)))
}

/// DELETE /api/folders/{id}
pub async fn delete_folder(
    State(state): State<AppState>,
    tenant: AuthTenant,
    Path(id): Path<i64>,
) -> Result<Json<DeleteFolderResponse>, ApiError> {
    state.folder_service.delete(&tenant, id).await?;
    Ok(Json(DeleteFolderResponse {
        success: true,
        message: "Folder deleted successfully".to_string(),
    }))
}
