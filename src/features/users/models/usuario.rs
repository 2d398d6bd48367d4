use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for users
#[derive(Debug, Clone, FromRow)]
pub struct Usuario {
    pub id: Uuid,
    pub nombre: String,
    pub apellido: Option<String>,
    pub email: String,
    pub password_hash: String,
    pub carrera: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
