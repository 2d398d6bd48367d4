use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for courses
#[derive(Debug, Clone, FromRow)]
pub struct Materia {
    pub id: Uuid,
    pub id_usuario: Uuid,
    pub nombre: String,
    pub codigo: Option<String>,
    pub descripcion: Option<String>,
    pub color: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
