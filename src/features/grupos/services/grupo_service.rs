use sqlx::{PgPool, QueryBuilder};
use tracing::info;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::grupos::dtos::{
    CreateGrupoDto, GrupoResponseDto, MiembroResponseDto, UpdateGrupoDto,
};
use crate::features::grupos::models::{Grupo, GrupoMiembro};

/// Service for class-group operations
pub struct GrupoService {
    pool: PgPool,
}

impl GrupoService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, owner_id: Uuid, dto: CreateGrupoDto) -> Result<GrupoResponseDto> {
        let grupo = sqlx::query_as::<_, Grupo>(
            r#"
            INSERT INTO grupos (id_usuario, id_materia, nombre, descripcion)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(owner_id)
        .bind(dto.id_materia)
        .bind(&dto.nombre)
        .bind(&dto.descripcion)
        .fetch_one(&self.pool)
        .await?;

        info!("Grupo created: id={}, owner={}", grupo.id, owner_id);

        Ok(grupo.into())
    }

    /// Groups the caller owns or belongs to
    pub async fn list(&self, user_id: Uuid) -> Result<Vec<GrupoResponseDto>> {
        let grupos = sqlx::query_as::<_, Grupo>(
            r#"
            SELECT DISTINCT g.* FROM grupos g
            LEFT JOIN grupo_miembros m ON m.id_grupo = g.id
            WHERE g.id_usuario = $1 OR m.id_usuario = $1
            ORDER BY g.nombre ASC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(grupos.into_iter().map(|g| g.into()).collect())
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<GrupoResponseDto> {
        let grupo = self.find(id).await?;
        Ok(grupo.into())
    }

    pub async fn update(
        &self,
        id: Uuid,
        owner_id: Uuid,
        dto: UpdateGrupoDto,
    ) -> Result<GrupoResponseDto> {
        if !dto.has_updates() {
            return Err(AppError::BadRequest(
                "No updatable field present".to_string(),
            ));
        }

        let existing = self.find(id).await?;
        if existing.id_usuario != owner_id {
            return Err(AppError::Forbidden(
                "Only the group owner can modify it".to_string(),
            ));
        }

        let mut builder = QueryBuilder::new("UPDATE grupos SET updated_at = NOW()");
        if let Some(nombre) = &dto.nombre {
            builder.push(", nombre = ").push_bind(nombre);
        }
        if let Some(id_materia) = dto.id_materia {
            builder.push(", id_materia = ").push_bind(id_materia);
        }
        if let Some(descripcion) = &dto.descripcion {
            builder.push(", descripcion = ").push_bind(descripcion);
        }
        builder.push(" WHERE id = ").push_bind(id);
        builder.push(" RETURNING *");

        let grupo = builder
            .build_query_as::<Grupo>()
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Grupo '{}' not found", id)))?;

        info!("Grupo updated: id={}", grupo.id);

        Ok(grupo.into())
    }

    pub async fn remove(&self, id: Uuid, owner_id: Uuid) -> Result<()> {
        let existing = self.find(id).await?;
        if existing.id_usuario != owner_id {
            return Err(AppError::Forbidden(
                "Only the group owner can delete it".to_string(),
            ));
        }

        sqlx::query("DELETE FROM grupos WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        info!("Grupo deleted: id={}", id);

        Ok(())
    }

    pub async fn add_member(&self, grupo_id: Uuid, member_id: Uuid) -> Result<()> {
        // Both sides must exist; the FK reports the missing one
        self.find(grupo_id).await?;

        sqlx::query(
            r#"
            INSERT INTO grupo_miembros (id_grupo, id_usuario)
            VALUES ($1, $2)
            "#,
        )
        .bind(grupo_id)
        .bind(member_id)
        .execute(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                AppError::Conflict("User is already a member of this group".to_string())
            }
            sqlx::Error::Database(db) if db.is_foreign_key_violation() => {
                AppError::NotFound(format!("User '{}' not found", member_id))
            }
            _ => AppError::Database(e),
        })?;

        info!("Member added: grupo={}, usuario={}", grupo_id, member_id);

        Ok(())
    }

    pub async fn list_members(&self, grupo_id: Uuid) -> Result<Vec<MiembroResponseDto>> {
        self.find(grupo_id).await?;

        let members = sqlx::query_as::<_, GrupoMiembro>(
            r#"
            SELECT u.id AS id_usuario, u.nombre, u.email, m.joined_at
            FROM grupo_miembros m
            JOIN usuarios u ON u.id = m.id_usuario
            WHERE m.id_grupo = $1
            ORDER BY m.joined_at ASC
            "#,
        )
        .bind(grupo_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(members.into_iter().map(|m| m.into()).collect())
    }

    pub async fn remove_member(&self, grupo_id: Uuid, member_id: Uuid) -> Result<()> {
        let removed = sqlx::query(
            "DELETE FROM grupo_miembros WHERE id_grupo = $1 AND id_usuario = $2",
        )
        .bind(grupo_id)
        .bind(member_id)
        .execute(&self.pool)
        .await?;

        if removed.rows_affected() == 0 {
            return Err(AppError::NotFound(
                "Membership not found for this group".to_string(),
            ));
        }

        info!("Member removed: grupo={}, usuario={}", grupo_id, member_id);

        Ok(())
    }

    async fn find(&self, id: Uuid) -> Result<Grupo> {
        let grupo = sqlx::query_as::<_, Grupo>("SELECT * FROM grupos WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        grupo.ok_or_else(|| AppError::NotFound(format!("Grupo '{}' not found", id)))
    }
}
