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
use crate::features::tareas::dtos::{
    CreateTareaDto, TareaListQuery, TareaResponseDto, UpdateTareaDto,
};
use crate::features::tareas::services::TareaService;
use crate::shared::types::ApiResponse;

/// Create a tarea
#[utoipa::path(
    post,
    path = "/api/tareas",
    tag = "tareas",
    request_body = CreateTareaDto,
    responses(
        (status = 201, description = "Tarea created", body = ApiResponse<TareaResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Referenced materia not found")
    ),
    security(("bearer_auth" = []))
)]
pub async fn create_tarea(
    user: AuthenticatedUser,
    State(service): State<Arc<TareaService>>,
    AppJson(dto): AppJson<CreateTareaDto>,
) -> Result<(StatusCode, Json<ApiResponse<TareaResponseDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let tarea = service.create(user.sub, dto).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(tarea), None, None)),
    ))
}

/// List tareas filtered by user and/or materia
#[utoipa::path(
    get,
    path = "/api/tareas",
    tag = "tareas",
    params(TareaListQuery),
    responses(
        (status = 200, description = "Matching tareas", body = ApiResponse<Vec<TareaResponseDto>>),
        (status = 400, description = "No filter provided")
    ),
    security(("bearer_auth" = []))
)]
pub async fn list_tareas(
    _user: AuthenticatedUser,
    State(service): State<Arc<TareaService>>,
    Query(query): Query<TareaListQuery>,
) -> Result<Json<ApiResponse<Vec<TareaResponseDto>>>> {
    let tareas = service.list(&query).await?;
    Ok(Json(ApiResponse::success(Some(tareas), None, None)))
}

/// Get a tarea by id
#[utoipa::path(
    get,
    path = "/api/tareas/{id}",
    tag = "tareas",
    params(("id" = Uuid, Path, description = "Tarea id")),
    responses(
        (status = 200, description = "The tarea", body = ApiResponse<TareaResponseDto>),
        (status = 404, description = "Tarea not found")
    ),
    security(("bearer_auth" = []))
)]
pub async fn get_tarea(
    _user: AuthenticatedUser,
    State(service): State<Arc<TareaService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<TareaResponseDto>>> {
    let tarea = service.get_by_id(id).await?;
    Ok(Json(ApiResponse::success(Some(tarea), None, None)))
}

/// Update a tarea (owner only)
#[utoipa::path(
    put,
    path = "/api/tareas/{id}",
    tag = "tareas",
    params(("id" = Uuid, Path, description = "Tarea id")),
    request_body = UpdateTareaDto,
    responses(
        (status = 200, description = "Updated tarea", body = ApiResponse<TareaResponseDto>),
        (status = 400, description = "Nothing to update"),
        (status = 403, description = "Not the owner"),
        (status = 404, description = "Tarea not found")
    ),
    security(("bearer_auth" = []))
)]
pub async fn update_tarea(
    user: AuthenticatedUser,
    State(service): State<Arc<TareaService>>,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<UpdateTareaDto>,
) -> Result<Json<ApiResponse<TareaResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let tarea = service.update(id, user.sub, dto).await?;
    Ok(Json(ApiResponse::success(
        Some(tarea),
        Some("Tarea updated".to_string()),
        None,
    )))
}

/// Delete a tarea (owner only)
#[utoipa::path(
    delete,
    path = "/api/tareas/{id}",
    tag = "tareas",
    params(("id" = Uuid, Path, description = "Tarea id")),
    responses(
        (status = 200, description = "Tarea deleted"),
        (status = 403, description = "Not the owner"),
        (status = 404, description = "Tarea not found")
    ),
    security(("bearer_auth" = []))
)]
pub async fn delete_tarea(
    user: AuthenticatedUser,
    State(service): State<Arc<TareaService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>> {
    service.remove(id, user.sub).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Tarea deleted".to_string()),
        None,
    )))
}
