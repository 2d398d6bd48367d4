use sqlx::{PgPool, QueryBuilder};
use tracing::info;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::users::dtos::{UpdateUserDto, UserResponseDto};
use crate::features::users::models::Usuario;

/// Service for user profile operations
pub struct UserService {
    pool: PgPool,
}

impl UserService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<UserResponseDto> {
        let user = sqlx::query_as::<_, Usuario>(
            "SELECT * FROM usuarios WHERE id = $1 AND is_active = TRUE",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        user.map(|u| u.into())
            .ok_or_else(|| AppError::NotFound(format!("User '{}' not found", id)))
    }

    /// Apply the fields present in the request, nothing else
    pub async fn update_profile(&self, id: Uuid, dto: UpdateUserDto) -> Result<UserResponseDto> {
        if !dto.has_updates() {
            return Err(AppError::BadRequest(
                "No updatable field present".to_string(),
            ));
        }

        let mut builder = QueryBuilder::new("UPDATE usuarios SET updated_at = NOW()");
        if let Some(nombre) = &dto.nombre {
            builder.push(", nombre = ").push_bind(nombre);
        }
        if let Some(apellido) = &dto.apellido {
            builder.push(", apellido = ").push_bind(apellido);
        }
        if let Some(carrera) = &dto.carrera {
            builder.push(", carrera = ").push_bind(carrera);
        }
        builder.push(" WHERE id = ").push_bind(id);
        builder.push(" AND is_active = TRUE RETURNING *");

        let user = builder
            .build_query_as::<Usuario>()
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User '{}' not found", id)))?;

        info!("User profile updated: id={}", user.id);

        Ok(user.into())
    }
}
