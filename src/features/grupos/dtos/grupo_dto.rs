use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::grupos::models::{Grupo, GrupoMiembro};

/// Request DTO for creating a grupo
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateGrupoDto {
    #[validate(length(min = 1, max = 100, message = "nombre must be 1-100 characters"))]
    pub nombre: String,

    pub id_materia: Option<Uuid>,

    #[validate(length(max = 500, message = "descripcion must be at most 500 characters"))]
    pub descripcion: Option<String>,
}

/// Partial update; only fields present are applied
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateGrupoDto {
    #[validate(length(min = 1, max = 100, message = "nombre must be 1-100 characters"))]
    pub nombre: Option<String>,

    pub id_materia: Option<Uuid>,

    #[validate(length(max = 500, message = "descripcion must be at most 500 characters"))]
    pub descripcion: Option<String>,
}

impl UpdateGrupoDto {
    pub fn has_updates(&self) -> bool {
        self.nombre.is_some() || self.id_materia.is_some() || self.descripcion.is_some()
    }
}

/// Request DTO for adding a member
#[derive(Debug, Deserialize, ToSchema)]
pub struct AddMiembroDto {
    pub id_usuario: Uuid,
}

/// Response DTO for grupos
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct GrupoResponseDto {
    pub id: Uuid,
    pub id_usuario: Uuid,
    pub id_materia: Option<Uuid>,
    pub nombre: String,
    pub descripcion: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Grupo> for GrupoResponseDto {
    fn from(g: Grupo) -> Self {
        Self {
            id: g.id,
            id_usuario: g.id_usuario,
            id_materia: g.id_materia,
            nombre: g.nombre,
            descripcion: g.descripcion,
            created_at: g.created_at,
        }
    }
}

/// Response DTO for group members
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MiembroResponseDto {
    pub id_usuario: Uuid,
    pub nombre: String,
    pub email: String,
    pub joined_at: DateTime<Utc>,
}

impl From<GrupoMiembro> for MiembroResponseDto {
    fn from(m: GrupoMiembro) -> Self {
        Self {
            id_usuario: m.id_usuario,
            nombre: m.nombre,
            email: m.email,
            joined_at: m.joined_at,
        }
    }
}
