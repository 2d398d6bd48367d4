use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::materias::models::Materia;
use crate::shared::validation::MATERIA_CODE_REGEX;

/// Request DTO for creating a materia
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateMateriaDto {
    #[validate(length(min = 1, max = 100, message = "nombre must be 1-100 characters"))]
    pub nombre: String,

    #[validate(regex(
        path = *MATERIA_CODE_REGEX,
        message = "codigo must look like MAT101 or FIS-202"
    ))]
    pub codigo: Option<String>,

    #[validate(length(max = 500, message = "descripcion must be at most 500 characters"))]
    pub descripcion: Option<String>,

    #[validate(length(max = 20, message = "color must be at most 20 characters"))]
    pub color: Option<String>,
}

/// Partial update; only fields present are applied
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateMateriaDto {
    #[validate(length(min = 1, max = 100, message = "nombre must be 1-100 characters"))]
    pub nombre: Option<String>,

    #[validate(regex(
        path = *MATERIA_CODE_REGEX,
        message = "codigo must look like MAT101 or FIS-202"
    ))]
    pub codigo: Option<String>,

    #[validate(length(max = 500, message = "descripcion must be at most 500 characters"))]
    pub descripcion: Option<String>,

    #[validate(length(max = 20, message = "color must be at most 20 characters"))]
    pub color: Option<String>,
}

impl UpdateMateriaDto {
    pub fn has_updates(&self) -> bool {
        self.nombre.is_some()
            || self.codigo.is_some()
            || self.descripcion.is_some()
            || self.color.is_some()
    }
}

/// Response DTO for materias
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MateriaResponseDto {
    pub id: Uuid,
    pub id_usuario: Uuid,
    pub nombre: String,
    pub codigo: Option<String>,
    pub descripcion: Option<String>,
    pub color: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Materia> for MateriaResponseDto {
    fn from(m: Materia) -> Self {
        Self {
            id: m.id,
            id_usuario: m.id_usuario,
            nombre: m.nombre,
            codigo: m.codigo,
            descripcion: m.descripcion,
            color: m.color,
            created_at: m.created_at,
        }
    }
}
