use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::pomodoro::dtos::{CreateSesionDto, SesionResponseDto};
use crate::features::pomodoro::models::SesionPomodoro;

/// Service for Pomodoro session logging
pub struct SesionService {
    pool: PgPool,
}

impl SesionService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, dto: CreateSesionDto) -> Result<SesionResponseDto> {
        let sesion = sqlx::query_as::<_, SesionPomodoro>(
            r#"
            INSERT INTO sesiones_pomodoro (id_tarea, duracion_segundos, fecha)
            VALUES ($1, $2, COALESCE($3, NOW()))
            RETURNING *
            "#,
        )
        .bind(dto.id_tarea)
        .bind(dto.duracion_segundos)
        .bind(dto.fecha)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.is_foreign_key_violation() => {
                AppError::NotFound("Tarea not found".to_string())
            }
            _ => AppError::Database(e),
        })?;

        info!(
            "Sesion logged: id={}, tarea={}, duracion={}s",
            sesion.id, sesion.id_tarea, sesion.duracion_segundos
        );

        Ok(sesion.into())
    }

    /// Sessions belonging to a user's tareas, newest first.
    pub async fn list_by_usuario(&self, id_usuario: Uuid) -> Result<Vec<SesionResponseDto>> {
        let sesiones = sqlx::query_as::<_, SesionPomodoro>(
            r#"
            SELECT * FROM sesiones_pomodoro
            WHERE id_tarea IN (SELECT id FROM tareas WHERE id_usuario = $1)
            ORDER BY fecha DESC
            "#,
        )
        .bind(id_usuario)
        .fetch_all(&self.pool)
        .await?;

        Ok(sesiones.into_iter().map(|s| s.into()).collect())
    }

    /// Sessions belonging to a materia's tareas, newest first.
    pub async fn list_by_materia(&self, id_materia: Uuid) -> Result<Vec<SesionResponseDto>> {
        let sesiones = sqlx::query_as::<_, SesionPomodoro>(
            r#"
            SELECT * FROM sesiones_pomodoro
            WHERE id_tarea IN (SELECT id FROM tareas WHERE id_materia = $1)
            ORDER BY fecha DESC
            "#,
        )
        .bind(id_materia)
        .fetch_all(&self.pool)
        .await?;

        Ok(sesiones.into_iter().map(|s| s.into()).collect())
    }

    pub async fn list_by_tarea(&self, id_tarea: Uuid) -> Result<Vec<SesionResponseDto>> {
        let sesiones = sqlx::query_as::<_, SesionPomodoro>(
            "SELECT * FROM sesiones_pomodoro WHERE id_tarea = $1 ORDER BY fecha DESC",
        )
        .bind(id_tarea)
        .fetch_all(&self.pool)
        .await?;

        Ok(sesiones.into_iter().map(|s| s.into()).collect())
    }

    pub async fn remove(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM sesiones_pomodoro WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Sesion not found".to_string()));
        }

        info!("Sesion deleted: id={}", id);

        Ok(())
    }
}
