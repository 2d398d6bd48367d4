use sqlx::{PgPool, QueryBuilder};
use tracing::info;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::materias::dtos::{CreateMateriaDto, MateriaResponseDto, UpdateMateriaDto};
use crate::features::materias::models::Materia;
use crate::shared::types::PaginationQuery;

/// Service for course operations
pub struct MateriaService {
    pool: PgPool,
}

impl MateriaService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, owner_id: Uuid, dto: CreateMateriaDto) -> Result<MateriaResponseDto> {
        let materia = sqlx::query_as::<_, Materia>(
            r#"
            INSERT INTO materias (id_usuario, nombre, codigo, descripcion, color)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(owner_id)
        .bind(&dto.nombre)
        .bind(&dto.codigo)
        .bind(&dto.descripcion)
        .bind(&dto.color)
        .fetch_one(&self.pool)
        .await?;

        info!("Materia created: id={}, owner={}", materia.id, owner_id);

        Ok(materia.into())
    }

    /// The caller's materias, alphabetical, paginated. Returns (rows, total).
    pub async fn list(
        &self,
        owner_id: Uuid,
        pagination: &PaginationQuery,
    ) -> Result<(Vec<MateriaResponseDto>, i64)> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM materias WHERE id_usuario = $1")
            .bind(owner_id)
            .fetch_one(&self.pool)
            .await?;

        let materias = sqlx::query_as::<_, Materia>(
            r#"
            SELECT * FROM materias
            WHERE id_usuario = $1
            ORDER BY nombre ASC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(owner_id)
        .bind(pagination.limit())
        .bind(pagination.offset())
        .fetch_all(&self.pool)
        .await?;

        Ok((materias.into_iter().map(|m| m.into()).collect(), total))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<MateriaResponseDto> {
        let materia = self.find(id).await?;
        Ok(materia.into())
    }

    pub async fn update(
        &self,
        id: Uuid,
        owner_id: Uuid,
        dto: UpdateMateriaDto,
    ) -> Result<MateriaResponseDto> {
        if !dto.has_updates() {
            return Err(AppError::BadRequest(
                "No updatable field present".to_string(),
            ));
        }

        let existing = self.find(id).await?;
        if existing.id_usuario != owner_id {
            return Err(AppError::Forbidden(
                "You do not have permission to modify this materia".to_string(),
            ));
        }

        let mut builder = QueryBuilder::new("UPDATE materias SET updated_at = NOW()");
        if let Some(nombre) = &dto.nombre {
            builder.push(", nombre = ").push_bind(nombre);
        }
        if let Some(codigo) = &dto.codigo {
            builder.push(", codigo = ").push_bind(codigo);
        }
        if let Some(descripcion) = &dto.descripcion {
            builder.push(", descripcion = ").push_bind(descripcion);
        }
        if let Some(color) = &dto.color {
            builder.push(", color = ").push_bind(color);
        }
        builder.push(" WHERE id = ").push_bind(id);
        builder.push(" RETURNING *");

        let materia = builder
            .build_query_as::<Materia>()
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Materia '{}' not found", id)))?;

        info!("Materia updated: id={}", materia.id);

        Ok(materia.into())
    }

    pub async fn remove(&self, id: Uuid, owner_id: Uuid) -> Result<()> {
        let existing = self.find(id).await?;
        if existing.id_usuario != owner_id {
            return Err(AppError::Forbidden(
                "You do not have permission to delete this materia".to_string(),
            ));
        }

        sqlx::query("DELETE FROM materias WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        info!("Materia deleted: id={}", id);

        Ok(())
    }

    async fn find(&self, id: Uuid) -> Result<Materia> {
        let materia = sqlx::query_as::<_, Materia>("SELECT * FROM materias WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        materia.ok_or_else(|| AppError::NotFound(format!("Materia '{}' not found", id)))
    }
}
