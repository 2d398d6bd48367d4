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
use crate::features::grupos::dtos::{
    AddMiembroDto, CreateGrupoDto, GrupoResponseDto, MiembroResponseDto, UpdateGrupoDto,
};
use crate::features::grupos::services::GrupoService;
use crate::shared::types::ApiResponse;

/// Create a grupo
#[utoipa::path(
    post,
    path = "/api/grupos",
    tag = "grupos",
    request_body = CreateGrupoDto,
    responses(
        (status = 201, description = "Grupo created", body = ApiResponse<GrupoResponseDto>),
        (status = 400, description = "Validation error")
    ),
    security(("bearer_auth" = []))
)]
pub async fn create_grupo(
    user: AuthenticatedUser,
    State(service): State<Arc<GrupoService>>,
    AppJson(dto): AppJson<CreateGrupoDto>,
) -> Result<(StatusCode, Json<ApiResponse<GrupoResponseDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let grupo = service.create(user.sub, dto).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(grupo), None, None)),
    ))
}

/// List groups the caller owns or belongs to
#[utoipa::path(
    get,
    path = "/api/grupos",
    tag = "grupos",
    responses(
        (status = 200, description = "Groups of the caller", body = ApiResponse<Vec<GrupoResponseDto>>)
    ),
    security(("bearer_auth" = []))
)]
pub async fn list_grupos(
    user: AuthenticatedUser,
    State(service): State<Arc<GrupoService>>,
) -> Result<Json<ApiResponse<Vec<GrupoResponseDto>>>> {
    let grupos = service.list(user.sub).await?;
    Ok(Json(ApiResponse::success(Some(grupos), None, None)))
}

/// Get one grupo by id
#[utoipa::path(
    get,
    path = "/api/grupos/{id}",
    tag = "grupos",
    params(("id" = Uuid, Path, description = "Grupo id")),
    responses(
        (status = 200, description = "Grupo found", body = ApiResponse<GrupoResponseDto>),
        (status = 404, description = "Grupo not found")
    ),
    security(("bearer_auth" = []))
)]
pub async fn get_grupo(
    _user: AuthenticatedUser,
    State(service): State<Arc<GrupoService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<GrupoResponseDto>>> {
    let grupo = service.get_by_id(id).await?;
    Ok(Json(ApiResponse::success(Some(grupo), None, None)))
}

/// Update a grupo
#[utoipa::path(
    put,
    path = "/api/grupos/{id}",
    tag = "grupos",
    params(("id" = Uuid, Path, description = "Grupo id")),
    request_body = UpdateGrupoDto,
    responses(
        (status = 200, description = "Grupo updated", body = ApiResponse<GrupoResponseDto>),
        (status = 400, description = "No updatable field present"),
        (status = 403, description = "Not the owner"),
        (status = 404, description = "Grupo not found")
    ),
    security(("bearer_auth" = []))
)]
pub async fn update_grupo(
    user: AuthenticatedUser,
    State(service): State<Arc<GrupoService>>,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<UpdateGrupoDto>,
) -> Result<Json<ApiResponse<GrupoResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let grupo = service.update(id, user.sub, dto).await?;
    Ok(Json(ApiResponse::success(
        Some(grupo),
        Some("Grupo updated".to_string()),
        None,
    )))
}

/// Delete a grupo
#[utoipa::path(
    delete,
    path = "/api/grupos/{id}",
    tag = "grupos",
    params(("id" = Uuid, Path, description = "Grupo id")),
    responses(
        (status = 200, description = "Grupo deleted"),
        (status = 403, description = "Not the owner"),
        (status = 404, description = "Grupo not found")
    ),
    security(("bearer_auth" = []))
)]
pub async fn delete_grupo(
    user: AuthenticatedUser,
    State(service): State<Arc<GrupoService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>> {
    service.remove(id, user.sub).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Grupo deleted successfully".to_string()),
        None,
    )))
}

/// Add a member to a grupo
#[utoipa::path(
    post,
    path = "/api/grupos/{id}/miembros",
    tag = "grupos",
    params(("id" = Uuid, Path, description = "Grupo id")),
    request_body = AddMiembroDto,
    responses(
        (status = 201, description = "Member added"),
        (status = 404, description = "Grupo or user not found"),
        (status = 409, description = "Already a member")
    ),
    security(("bearer_auth" = []))
)]
pub async fn add_miembro(
    _user: AuthenticatedUser,
    State(service): State<Arc<GrupoService>>,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<AddMiembroDto>,
) -> Result<(StatusCode, Json<ApiResponse<()>>)> {
    service.add_member(id, dto.id_usuario).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            None,
            Some("Member added".to_string()),
            None,
        )),
    ))
}

/// List a grupo's members
#[utoipa::path(
    get,
    path = "/api/grupos/{id}/miembros",
    tag = "grupos",
    params(("id" = Uuid, Path, description = "Grupo id")),
    responses(
        (status = 200, description = "Members of the grupo", body = ApiResponse<Vec<MiembroResponseDto>>),
        (status = 404, description = "Grupo not found")
    ),
    security(("bearer_auth" = []))
)]
pub async fn list_miembros(
    _user: AuthenticatedUser,
    State(service): State<Arc<GrupoService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Vec<MiembroResponseDto>>>> {
    let members = service.list_members(id).await?;
    Ok(Json(ApiResponse::success(Some(members), None, None)))
}

/// Remove a member from a grupo
#[utoipa::path(
    delete,
    path = "/api/grupos/{id}/miembros/{id_usuario}",
    tag = "grupos",
    params(
        ("id" = Uuid, Path, description = "Grupo id"),
        ("id_usuario" = Uuid, Path, description = "Member user id")
    ),
    responses(
        (status = 200, description = "Member removed"),
        (status = 404, description = "Membership not found")
    ),
    security(("bearer_auth" = []))
)]
pub async fn remove_miembro(
    _user: AuthenticatedUser,
    State(service): State<Arc<GrupoService>>,
    Path((id, id_usuario)): Path<(Uuid, Uuid)>,
) -> Result<Json<ApiResponse<()>>> {
    service.remove_member(id, id_usuario).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Member removed".to_string()),
        None,
    )))
}
