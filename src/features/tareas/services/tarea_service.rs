use sqlx::{PgPool, QueryBuilder};
use tracing::info;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::tareas::dtos::{
    CreateTareaDto, TareaListQuery, TareaResponseDto, UpdateTareaDto,
};
use crate::features::tareas::models::Tarea;

/// Service for task operations
pub struct TareaService {
    pool: PgPool,
}

impl TareaService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, owner_id: Uuid, dto: CreateTareaDto) -> Result<TareaResponseDto> {
        let tarea = sqlx::query_as::<_, Tarea>(
            r#"
            INSERT INTO tareas (id_usuario, id_materia, titulo, descripcion, fecha_entrega)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(owner_id)
        .bind(dto.id_materia)
        .bind(&dto.titulo)
        .bind(&dto.descripcion)
        .bind(dto.fecha_entrega)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.is_foreign_key_violation() => {
                AppError::NotFound("Materia not found".to_string())
            }
            _ => AppError::Database(e),
        })?;

        info!("Tarea created: id={}, owner={}", tarea.id, owner_id);

        Ok(tarea.into())
    }

    /// List tasks by owner and/or materia. At least one filter is required.
    pub async fn list(&self, query: &TareaListQuery) -> Result<Vec<TareaResponseDto>> {
        if query.id_usuario.is_none() && query.id_materia.is_none() {
            return Err(AppError::BadRequest(
                "Provide id_usuario or id_materia to list tareas".to_string(),
            ));
        }

        let mut builder = QueryBuilder::new("SELECT * FROM tareas WHERE 1=1");
        if let Some(id_usuario) = query.id_usuario {
            builder.push(" AND id_usuario = ").push_bind(id_usuario);
        }
        if let Some(id_materia) = query.id_materia {
            builder.push(" AND id_materia = ").push_bind(id_materia);
        }
        builder.push(" ORDER BY created_at DESC");

        let tareas = builder
            .build_query_as::<Tarea>()
            .fetch_all(&self.pool)
            .await?;

        Ok(tareas.into_iter().map(|t| t.into()).collect())
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<TareaResponseDto> {
        let tarea = self.find(id).await?;
        Ok(tarea.into())
    }

    pub async fn update(
        &self,
        id: Uuid,
        owner_id: Uuid,
        dto: UpdateTareaDto,
    ) -> Result<TareaResponseDto> {
        if !dto.has_updates() {
            return Err(AppError::BadRequest("No fields to update".to_string()));
        }

        let tarea = self.find(id).await?;
        if tarea.id_usuario != owner_id {
            return Err(AppError::Forbidden(
                "You can only modify your own tareas".to_string(),
            ));
        }

        let mut builder = QueryBuilder::new("UPDATE tareas SET updated_at = NOW()");
        if let Some(titulo) = &dto.titulo {
            builder.push(", titulo = ").push_bind(titulo);
        }
        if let Some(descripcion) = &dto.descripcion {
            builder.push(", descripcion = ").push_bind(descripcion);
        }
        if let Some(id_materia) = dto.id_materia {
            builder.push(", id_materia = ").push_bind(id_materia);
        }
        if let Some(completada) = dto.completada {
            builder.push(", completada = ").push_bind(completada);
        }
        if let Some(fecha_entrega) = dto.fecha_entrega {
            builder.push(", fecha_entrega = ").push_bind(fecha_entrega);
        }
        builder.push(" WHERE id = ").push_bind(id);
        builder.push(" RETURNING *");

        let updated = builder
            .build_query_as::<Tarea>()
            .fetch_one(&self.pool)
            .await?;

        info!("Tarea updated: id={}", id);

        Ok(updated.into())
    }

    pub async fn remove(&self, id: Uuid, owner_id: Uuid) -> Result<()> {
        let tarea = self.find(id).await?;
        if tarea.id_usuario != owner_id {
            return Err(AppError::Forbidden(
                "You can only delete your own tareas".to_string(),
            ));
        }

        sqlx::query("DELETE FROM tareas WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        info!("Tarea deleted: id={}", id);

        Ok(())
    }

    async fn find(&self, id: Uuid) -> Result<Tarea> {
        sqlx::query_as::<_, Tarea>("SELECT * FROM tareas WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Tarea not found".to_string()))
    }
}
