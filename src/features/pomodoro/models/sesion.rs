use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A logged Pomodoro study session against a tarea
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SesionPomodoro {
    pub id: Uuid,
    pub id_tarea: Uuid,
    pub duracion_segundos: i32,
    pub fecha: DateTime<Utc>,
}
