use sqlx::{PgPool, QueryBuilder};
use std::sync::Arc;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::core::config::StorageConfig;
use crate::core::error::{AppError, Result};
use crate::features::archivos::dtos::{derive_extension, ArchivoResponseDto, UpdateArchivoDto};
use crate::features::archivos::models::Archivo;
use crate::modules::storage::LocalStore;

/// Service for the document upload/metadata pipeline
pub struct ArchivoService {
    pool: PgPool,
    store: Arc<LocalStore>,
    allowed_mime_types: Vec<String>,
    max_file_size: usize,
}

impl ArchivoService {
    pub fn new(pool: PgPool, store: Arc<LocalStore>, config: &StorageConfig) -> Self {
        Self {
            pool,
            store,
            allowed_mime_types: config.allowed_mime_types.clone(),
            max_file_size: config.max_file_size,
        }
    }

    /// Empty allow-list means no restriction
    pub fn is_mime_allowed(&self, content_type: &str) -> bool {
        self.allowed_mime_types.is_empty()
            || self.allowed_mime_types.iter().any(|m| m == content_type)
    }

    pub fn allowed_mime_types(&self) -> &[String] {
        &self.allowed_mime_types
    }

    pub fn max_file_size(&self) -> usize {
        self.max_file_size
    }

    /// Persist the bytes on disk, then record the metadata row.
    ///
    /// The disk write happens before the insert; an insert failure removes
    /// the just-written file so neither effect survives alone.
    pub async fn upload(
        &self,
        owner_id: Uuid,
        original_filename: &str,
        display_name: Option<String>,
        extension_override: Option<String>,
        data: Vec<u8>,
    ) -> Result<ArchivoResponseDto> {
        // The owner must exist before any artifact is created
        let owner_exists: bool =
            sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM usuarios WHERE id = $1)")
                .bind(owner_id)
                .fetch_one(&self.pool)
                .await?;

        if !owner_exists {
            return Err(AppError::NotFound(format!("User '{}' not found", owner_id)));
        }

        let stored = self
            .store
            .save(&owner_id.to_string(), original_filename, &data)
            .await?;

        debug!("File stored: {}", stored.relative_path);

        let nombre_archivo = display_name
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| original_filename.to_string());
        let extension = extension_override
            .filter(|s| !s.trim().is_empty())
            .map(|s| s.to_uppercase())
            .unwrap_or_else(|| derive_extension(original_filename));

        let inserted = sqlx::query_as::<_, Archivo>(
            r#"
            INSERT INTO archivos (id_usuario, nombre_archivo, extension, ruta_archivo, tamano_bytes)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(owner_id)
        .bind(&nombre_archivo)
        .bind(&extension)
        .bind(&stored.relative_path)
        .bind(stored.size_bytes)
        .fetch_one(&self.pool)
        .await;

        let archivo = match inserted {
            Ok(archivo) => archivo,
            Err(e) => {
                // Roll back the disk write so no orphan bytes remain
                if let Err(cleanup) = self.store.delete(&stored.relative_path).await {
                    warn!(
                        "Failed to remove orphaned file {}: {}",
                        stored.relative_path, cleanup
                    );
                }
                tracing::error!("Failed to persist archivo metadata: {:?}", e);
                return Err(AppError::Database(e));
            }
        };

        info!(
            "Archivo created: id={}, owner={}, path={}, size={}",
            archivo.id, archivo.id_usuario, archivo.ruta_archivo, archivo.tamano_bytes
        );

        Ok(self.to_response(archivo))
    }

    /// All documents of one owner, most recent first
    pub async fn list_by_owner(&self, owner_id: Uuid) -> Result<Vec<ArchivoResponseDto>> {
        let archivos = sqlx::query_as::<_, Archivo>(
            "SELECT * FROM archivos WHERE id_usuario = $1 ORDER BY fecha_subida DESC",
        )
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(archivos.into_iter().map(|a| self.to_response(a)).collect())
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<ArchivoResponseDto> {
        let archivo = self.find(id).await?;
        Ok(self.to_response(archivo))
    }

    /// Apply the metadata fields present in the request and stamp
    /// `ultima_revision`. Bytes are never re-written here.
    pub async fn update(
        &self,
        id: Uuid,
        user_id: Uuid,
        dto: UpdateArchivoDto,
    ) -> Result<ArchivoResponseDto> {
        if !dto.has_updates() {
            return Err(AppError::BadRequest(
                "No updatable field present".to_string(),
            ));
        }

        let existing = self.find(id).await?;
        if existing.id_usuario != user_id {
            return Err(AppError::Forbidden(
                "You do not have permission to modify this file".to_string(),
            ));
        }

        let mut builder = QueryBuilder::new("UPDATE archivos SET ultima_revision = NOW()");
        if let Some(nombre) = &dto.nombre_archivo {
            builder.push(", nombre_archivo = ").push_bind(nombre);
        }
        if let Some(extension) = &dto.extension {
            builder
                .push(", extension = ")
                .push_bind(extension.to_uppercase());
        }
        if let Some(estado) = dto.estado {
            builder.push(", estado = ").push_bind(estado.as_str());
        }
        builder.push(" WHERE id = ").push_bind(id);
        builder.push(" RETURNING *");

        let archivo = builder
            .build_query_as::<Archivo>()
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Archivo '{}' not found", id)))?;

        info!("Archivo updated: id={}", archivo.id);

        Ok(self.to_response(archivo))
    }

    /// Delete the metadata row, then the bytes.
    ///
    /// The row is the authoritative record: if the byte removal fails the
    /// request still succeeds with a warning, and a retried delete of the
    /// same id reports not-found.
    pub async fn remove(&self, id: Uuid, user_id: Uuid) -> Result<()> {
        let archivo = self.find(id).await?;
        if archivo.id_usuario != user_id {
            return Err(AppError::Forbidden(
                "You do not have permission to delete this file".to_string(),
            ));
        }

        let deleted = sqlx::query("DELETE FROM archivos WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if deleted.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Archivo '{}' not found", id)));
        }

        if let Err(e) = self.store.delete(&archivo.ruta_archivo).await {
            warn!(
                "Archivo row {} deleted but bytes at {} remain: {}",
                id, archivo.ruta_archivo, e
            );
        }

        info!("Archivo deleted: id={}, path={}", id, archivo.ruta_archivo);

        Ok(())
    }

    async fn find(&self, id: Uuid) -> Result<Archivo> {
        let archivo = sqlx::query_as::<_, Archivo>("SELECT * FROM archivos WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        archivo.ok_or_else(|| AppError::NotFound(format!("Archivo '{}' not found", id)))
    }

    fn to_response(&self, archivo: Archivo) -> ArchivoResponseDto {
        let url = self.store.file_url(&archivo.ruta_archivo);
        ArchivoResponseDto::from_model(archivo, url)
    }
}
