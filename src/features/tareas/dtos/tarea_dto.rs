use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::features::tareas::models::Tarea;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateTareaDto {
    #[validate(length(min = 1, max = 200, message = "titulo must be 1-200 characters"))]
    pub titulo: String,
    #[validate(length(max = 2000, message = "descripcion must be at most 2000 characters"))]
    pub descripcion: Option<String>,
    pub id_materia: Option<Uuid>,
    pub fecha_entrega: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateTareaDto {
    #[validate(length(min = 1, max = 200, message = "titulo must be 1-200 characters"))]
    pub titulo: Option<String>,
    #[validate(length(max = 2000, message = "descripcion must be at most 2000 characters"))]
    pub descripcion: Option<String>,
    pub id_materia: Option<Uuid>,
    pub completada: Option<bool>,
    pub fecha_entrega: Option<DateTime<Utc>>,
}

impl UpdateTareaDto {
    pub fn has_updates(&self) -> bool {
        self.titulo.is_some()
            || self.descripcion.is_some()
            || self.id_materia.is_some()
            || self.completada.is_some()
            || self.fecha_entrega.is_some()
    }
}

/// Filter for the task listing. At least one of the two must be present.
#[derive(Debug, Deserialize, IntoParams)]
pub struct TareaListQuery {
    pub id_usuario: Option<Uuid>,
    pub id_materia: Option<Uuid>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TareaResponseDto {
    pub id: Uuid,
    pub id_usuario: Uuid,
    pub id_materia: Option<Uuid>,
    pub titulo: String,
    pub descripcion: Option<String>,
    pub completada: bool,
    pub fecha_entrega: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Tarea> for TareaResponseDto {
    fn from(t: Tarea) -> Self {
        Self {
            id: t.id,
            id_usuario: t.id_usuario,
            id_materia: t.id_materia,
            titulo: t.titulo,
            descripcion: t.descripcion,
            completada: t.completada,
            fecha_entrega: t.fecha_entrega,
            created_at: t.created_at,
            updated_at: t.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_update_has_no_updates() {
        let dto = UpdateTareaDto {
            titulo: None,
            descripcion: None,
            id_materia: None,
            completada: None,
            fecha_entrega: None,
        };
        assert!(!dto.has_updates());
    }

    #[test]
    fn toggling_completada_counts_as_update() {
        let dto = UpdateTareaDto {
            titulo: None,
            descripcion: None,
            id_materia: None,
            completada: Some(true),
            fecha_entrega: None,
        };
        assert!(dto.has_updates());
    }

    #[test]
    fn empty_titulo_fails_validation() {
        let dto = CreateTareaDto {
            titulo: String::new(),
            descripcion: None,
            id_materia: None,
            fecha_entrega: None,
        };
        assert!(dto.validate().is_err());
    }
}
