use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::auth::model::AuthenticatedUser;
use crate::features::materias::dtos::{CreateMateriaDto, MateriaResponseDto, UpdateMateriaDto};
use crate::features::materias::services::MateriaService;
use crate::shared::types::{ApiResponse, Meta, PaginationQuery};

/// Create a materia
#[utoipa::path(
    post,
    path = "/api/materias",
    tag = "materias",
    request_body = CreateMateriaDto,
    responses(
        (status = 201, description = "Materia created", body = ApiResponse<MateriaResponseDto>),
        (status = 400, description = "Validation error")
    ),
    security(("bearer_auth" = []))
)]
pub async fn create_materia(
    user: AuthenticatedUser,
    State(service): State<Arc<MateriaService>>,
    AppJson(dto): AppJson<CreateMateriaDto>,
) -> Result<(StatusCode, Json<ApiResponse<MateriaResponseDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let materia = service.create(user.sub, dto).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(materia), None, None)),
    ))
}

/// List the caller's materias (paginated)
#[utoipa::path(
    get,
    path = "/api/materias",
    tag = "materias",
    params(PaginationQuery),
    responses(
        (status = 200, description = "Materias of the caller", body = ApiResponse<Vec<MateriaResponseDto>>)
    ),
    security(("bearer_auth" = []))
)]
pub async fn list_materias(
    user: AuthenticatedUser,
    State(service): State<Arc<MateriaService>>,
    Query(pagination): Query<PaginationQuery>,
) -> Result<Json<ApiResponse<Vec<MateriaResponseDto>>>> {
    let (materias, total) = service.list(user.sub, &pagination).await?;
    Ok(Json(ApiResponse::success(
        Some(materias),
        None,
        Some(Meta { total }),
    )))
}

/// Get one materia by id
#[utoipa::path(
    get,
    path = "/api/materias/{id}",
    tag = "materias",
    params(("id" = Uuid, Path, description = "Materia id")),
    responses(
        (status = 200, description = "Materia found", body = ApiResponse<MateriaResponseDto>),
        (status = 404, description = "Materia not found")
    ),
    security(("bearer_auth" = []))
)]
pub async fn get_materia(
    _user: AuthenticatedUser,
    State(service): State<Arc<MateriaService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MateriaResponseDto>>> {
    let materia = service.get_by_id(id).await?;
    Ok(Json(ApiResponse::success(Some(materia), None, None)))
}

/// Update a materia
#[utoipa::path(
    put,
    path = "/api/materias/{id}",
    tag = "materias",
    params(("id" = Uuid, Path, description = "Materia id")),
    request_body = UpdateMateriaDto,
    responses(
        (status = 200, description = "Materia updated", body = ApiResponse<MateriaResponseDto>),
        (status = 400, description = "No updatable field present"),
        (status = 403, description = "Not the owner"),
        (status = 404, description = "Materia not found")
    ),
    security(("bearer_auth" = []))
)]
pub async fn update_materia(
    user: AuthenticatedUser,
    State(service): State<Arc<MateriaService>>,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<UpdateMateriaDto>,
) -> Result<Json<ApiResponse<MateriaResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let materia = service.update(id, user.sub, dto).await?;
    Ok(Json(ApiResponse::success(
        Some(materia),
        Some("Materia updated".to_string()),
        None,
    )))
}

/// Delete a materia
#[utoipa::path(
    delete,
    path = "/api/materias/{id}",
    tag = "materias",
    params(("id" = Uuid, Path, description = "Materia id")),
    responses(
        (status = 200, description = "Materia deleted"),
        (status = 403, description = "Not the owner"),
        (status = 404, description = "Materia not found")
    ),
    security(("bearer_auth" = []))
)]
pub async fn delete_materia(
    user: AuthenticatedUser,
    State(service): State<Arc<MateriaService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>> {
    service.remove(id, user.sub).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Materia deleted successfully".to_string()),
        None,
    )))
}
