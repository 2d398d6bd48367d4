use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for class groups
#[derive(Debug, Clone, FromRow)]
pub struct Grupo {
    pub id: Uuid,
    pub id_usuario: Uuid,
    pub id_materia: Option<Uuid>,
    pub nombre: String,
    pub descripcion: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Group membership row joined with basic member info
#[derive(Debug, Clone, FromRow)]
pub struct GrupoMiembro {
    pub id_usuario: Uuid,
    pub nombre: String,
    pub email: String,
    pub joined_at: DateTime<Utc>,
}
