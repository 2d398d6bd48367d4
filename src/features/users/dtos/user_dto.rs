use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::users::models::Usuario;

/// Response DTO for user profiles. Never exposes the password hash.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserResponseDto {
    pub id: Uuid,
    pub nombre: String,
    pub apellido: Option<String>,
    pub email: String,
    pub carrera: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Usuario> for UserResponseDto {
    fn from(u: Usuario) -> Self {
        Self {
            id: u.id,
            nombre: u.nombre,
            apellido: u.apellido,
            email: u.email,
            carrera: u.carrera,
            created_at: u.created_at,
        }
    }
}

/// Partial profile update; only fields present are applied
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateUserDto {
    #[validate(length(min = 1, max = 100, message = "nombre must be 1-100 characters"))]
    pub nombre: Option<String>,

    #[validate(length(max = 100, message = "apellido must be at most 100 characters"))]
    pub apellido: Option<String>,

    #[validate(length(max = 100, message = "carrera must be at most 100 characters"))]
    pub carrera: Option<String>,
}

impl UpdateUserDto {
    pub fn has_updates(&self) -> bool {
        self.nombre.is_some() || self.apellido.is_some() || self.carrera.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_update_has_no_updates() {
        let dto = UpdateUserDto {
            nombre: None,
            apellido: None,
            carrera: None,
        };
        assert!(!dto.has_updates());
    }

    #[test]
    fn single_field_counts_as_update() {
        let dto = UpdateUserDto {
            nombre: None,
            apellido: None,
            carrera: Some("Ingeniería".to_string()),
        };
        assert!(dto.has_updates());
    }
}
