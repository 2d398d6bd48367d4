use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::users::models::Usuario;

/// Request DTO for user registration
#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct RegisterRequestDto {
    #[validate(length(min = 1, max = 100, message = "nombre must be 1-100 characters"))]
    pub nombre: String,

    #[validate(length(max = 100, message = "apellido must be at most 100 characters"))]
    pub apellido: Option<String>,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,

    #[validate(length(max = 100, message = "carrera must be at most 100 characters"))]
    pub carrera: Option<String>,
}

/// Request DTO for user login
#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct LoginRequestDto {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Response DTO for authentication (register/login)
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AuthResponseDto {
    /// JWT access token
    pub access_token: String,
    /// Token type (always "Bearer")
    pub token_type: String,
    /// Token expiry time in seconds
    pub expires_in: i64,
    /// Authenticated user info
    pub user: AuthUserDto,
}

/// User info included in auth responses
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AuthUserDto {
    pub id: Uuid,
    pub nombre: String,
    pub apellido: Option<String>,
    pub email: String,
    pub carrera: Option<String>,
}

impl From<Usuario> for AuthUserDto {
    fn from(u: Usuario) -> Self {
        Self {
            id: u.id,
            nombre: u.nombre,
            apellido: u.apellido,
            email: u.email,
            carrera: u.carrera,
        }
    }
}
