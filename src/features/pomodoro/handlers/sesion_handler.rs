use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::auth::model::AuthenticatedUser;
use crate::features::pomodoro::dtos::{CreateSesionDto, SesionResponseDto};
use crate::features::pomodoro::services::SesionService;
use crate::shared::types::ApiResponse;

/// Log a Pomodoro session
#[utoipa::path(
    post,
    path = "/api/sesiones",
    tag = "pomodoro",
    request_body = CreateSesionDto,
    responses(
        (status = 201, description = "Sesion logged", body = ApiResponse<SesionResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Tarea not found")
    ),
    security(("bearer_auth" = []))
)]
pub async fn create_sesion(
    _user: AuthenticatedUser,
    State(service): State<Arc<SesionService>>,
    AppJson(dto): AppJson<CreateSesionDto>,
) -> Result<(StatusCode, Json<ApiResponse<SesionResponseDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let sesion = service.create(dto).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(sesion), None, None)),
    ))
}

/// Sessions for all of a user's tareas
#[utoipa::path(
    get,
    path = "/api/sesiones/usuario/{id_usuario}",
    tag = "pomodoro",
    params(("id_usuario" = Uuid, Path, description = "User id")),
    responses(
        (status = 200, description = "Sessions newest first", body = ApiResponse<Vec<SesionResponseDto>>)
    ),
    security(("bearer_auth" = []))
)]
pub async fn list_sesiones_by_usuario(
    _user: AuthenticatedUser,
    State(service): State<Arc<SesionService>>,
    Path(id_usuario): Path<Uuid>,
) -> Result<Json<ApiResponse<Vec<SesionResponseDto>>>> {
    let sesiones = service.list_by_usuario(id_usuario).await?;
    Ok(Json(ApiResponse::success(Some(sesiones), None, None)))
}

/// Sessions for all tareas of a materia
#[utoipa::path(
    get,
    path = "/api/sesiones/materia/{id_materia}",
    tag = "pomodoro",
    params(("id_materia" = Uuid, Path, description = "Materia id")),
    responses(
        (status = 200, description = "Sessions newest first", body = ApiResponse<Vec<SesionResponseDto>>)
    ),
    security(("bearer_auth" = []))
)]
pub async fn list_sesiones_by_materia(
    _user: AuthenticatedUser,
    State(service): State<Arc<SesionService>>,
    Path(id_materia): Path<Uuid>,
) -> Result<Json<ApiResponse<Vec<SesionResponseDto>>>> {
    let sesiones = service.list_by_materia(id_materia).await?;
    Ok(Json(ApiResponse::success(Some(sesiones), None, None)))
}

/// Sessions logged against one tarea
#[utoipa::path(
    get,
    path = "/api/sesiones/tarea/{id_tarea}",
    tag = "pomodoro",
    params(("id_tarea" = Uuid, Path, description = "Tarea id")),
    responses(
        (status = 200, description = "Sessions newest first", body = ApiResponse<Vec<SesionResponseDto>>)
    ),
    security(("bearer_auth" = []))
)]
pub async fn list_sesiones_by_tarea(
    _user: AuthenticatedUser,
    State(service): State<Arc<SesionService>>,
    Path(id_tarea): Path<Uuid>,
) -> Result<Json<ApiResponse<Vec<SesionResponseDto>>>> {
    let sesiones = service.list_by_tarea(id_tarea).await?;
    Ok(Json(ApiResponse::success(Some(sesiones), None, None)))
}

/// Delete a logged session
#[utoipa::path(
    delete,
    path = "/api/sesiones/{id}",
    tag = "pomodoro",
    params(("id" = Uuid, Path, description = "Sesion id")),
    responses(
        (status = 200, description = "Sesion deleted"),
        (status = 404, description = "Sesion not found")
    ),
    security(("bearer_auth" = []))
)]
pub async fn delete_sesion(
    _user: AuthenticatedUser,
    State(service): State<Arc<SesionService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>> {
    service.remove(id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Sesion deleted".to_string()),
        None,
    )))
}
