use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::auth::model::AuthenticatedUser;
use crate::features::users::dtos::{UpdateUserDto, UserResponseDto};
use crate::features::users::services::UserService;
use crate::shared::types::ApiResponse;

/// Get a user profile
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = "users",
    params(("id" = Uuid, Path, description = "User id")),
    responses(
        (status = 200, description = "User profile", body = ApiResponse<UserResponseDto>),
        (status = 404, description = "User not found")
    ),
    security(("bearer_auth" = []))
)]
pub async fn get_user(
    _user: AuthenticatedUser,
    State(service): State<Arc<UserService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<UserResponseDto>>> {
    let profile = service.get_by_id(id).await?;
    Ok(Json(ApiResponse::success(Some(profile), None, None)))
}

/// Update the caller's own profile
#[utoipa::path(
    put,
    path = "/api/users/{id}",
    tag = "users",
    params(("id" = Uuid, Path, description = "User id")),
    request_body = UpdateUserDto,
    responses(
        (status = 200, description = "Profile updated", body = ApiResponse<UserResponseDto>),
        (status = 400, description = "No updatable field present"),
        (status = 403, description = "Cannot update another user"),
        (status = 404, description = "User not found")
    ),
    security(("bearer_auth" = []))
)]
pub async fn update_user(
    user: AuthenticatedUser,
    State(service): State<Arc<UserService>>,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<UpdateUserDto>,
) -> Result<Json<ApiResponse<UserResponseDto>>> {
    if user.sub != id {
        return Err(AppError::Forbidden(
            "You can only update your own profile".to_string(),
        ));
    }

    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let profile = service.update_profile(id, dto).await?;
    Ok(Json(ApiResponse::success(
        Some(profile),
        Some("Profile updated".to_string()),
        None,
    )))
}
