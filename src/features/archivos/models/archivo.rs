use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for uploaded documents
#[derive(Debug, Clone, FromRow)]
pub struct Archivo {
    pub id: Uuid,
    pub id_usuario: Uuid,
    pub nombre_archivo: String,
    pub extension: String,
    /// Path relative to the uploads root, unique per row
    pub ruta_archivo: String,
    pub tamano_bytes: i64,
    pub estado: String,
    pub fecha_subida: DateTime<Utc>,
    pub ultima_revision: Option<DateTime<Utc>>,
}
