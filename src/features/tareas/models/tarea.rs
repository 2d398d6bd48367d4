use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A task, optionally attached to a materia
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Tarea {
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
