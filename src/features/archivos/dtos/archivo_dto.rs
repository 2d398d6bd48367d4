use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::archivos::models::Archivo;
use crate::shared::constants::UNKNOWN_EXTENSION;

/// Document lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema, Default)]
#[serde(rename_all = "lowercase")]
pub enum ArchivoStatusDto {
    #[default]
    Active,
    Inactive,
    Archived,
}

impl ArchivoStatusDto {
    pub fn as_str(&self) -> &'static str {
        match self {
            ArchivoStatusDto::Active => "active",
            ArchivoStatusDto::Inactive => "inactive",
            ArchivoStatusDto::Archived => "archived",
        }
    }

    pub fn from_db(value: &str) -> Self {
        match value {
            "inactive" => ArchivoStatusDto::Inactive,
            "archived" => ArchivoStatusDto::Archived,
            _ => ArchivoStatusDto::Active,
        }
    }
}

/// Upload request DTO for OpenAPI documentation.
/// The actual handler uses axum's Multipart extractor directly.
#[derive(Debug, ToSchema)]
#[allow(dead_code)]
pub struct UploadArchivoDto {
    /// The file to upload
    #[schema(format = Binary, content_media_type = "application/octet-stream")]
    pub file: String,
    /// Id of the owning user (required)
    pub id_usuario: String,
    /// Display name override; defaults to the original filename
    pub nombre_archivo: Option<String>,
    /// Extension override; defaults to the original filename's suffix
    pub extension: Option<String>,
}

/// Normalized document representation returned by every archivo endpoint
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ArchivoResponseDto {
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// Uppercase extension ("UNKNOWN" when the filename had no suffix)
    #[serde(rename = "type")]
    pub file_type: String,
    /// Size in bytes, computed from the bytes written to disk
    pub size: i64,
    pub status: ArchivoStatusDto,
    #[serde(rename = "uploadDate")]
    pub upload_date: DateTime<Utc>,
    #[serde(rename = "lastRevisedAt", skip_serializing_if = "Option::is_none")]
    pub last_revised_at: Option<DateTime<Utc>>,
    /// Retrieval URL, derived deterministically from the stored path
    pub url: String,
}

impl ArchivoResponseDto {
    pub fn from_model(archivo: Archivo, url: String) -> Self {
        Self {
            id: archivo.id,
            name: archivo.nombre_archivo,
            file_type: archivo.extension,
            size: archivo.tamano_bytes,
            status: ArchivoStatusDto::from_db(&archivo.estado),
            upload_date: archivo.fecha_subida,
            last_revised_at: archivo.ultima_revision,
            url,
        }
    }
}

/// Partial metadata update; only fields present are applied
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateArchivoDto {
    #[validate(length(min = 1, max = 255, message = "nombre_archivo must be 1-255 characters"))]
    pub nombre_archivo: Option<String>,

    #[validate(length(min = 1, max = 16, message = "extension must be 1-16 characters"))]
    pub extension: Option<String>,

    pub estado: Option<ArchivoStatusDto>,
}

impl UpdateArchivoDto {
    pub fn has_updates(&self) -> bool {
        self.nombre_archivo.is_some() || self.extension.is_some() || self.estado.is_some()
    }
}

/// Response DTO for delete operations
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DeleteArchivoResponseDto {
    pub deleted: bool,
}

/// Derive the uppercase extension from the original filename's suffix
/// after the last `.`, or the sentinel when no usable suffix exists.
pub fn derive_extension(filename: &str) -> String {
    match filename.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() && !ext.is_empty() => ext.to_uppercase(),
        _ => UNKNOWN_EXTENSION.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_from_multi_dot_filename() {
        assert_eq!(derive_extension("thesis.final.docx"), "DOCX");
    }

    #[test]
    fn extension_sentinel_when_no_dot() {
        assert_eq!(derive_extension("README"), "UNKNOWN");
    }

    #[test]
    fn extension_edge_cases() {
        assert_eq!(derive_extension("informe.PDF"), "PDF");
        assert_eq!(derive_extension(".gitignore"), "UNKNOWN");
        assert_eq!(derive_extension("trailing."), "UNKNOWN");
        assert_eq!(derive_extension(""), "UNKNOWN");
    }

    #[test]
    fn status_round_trips_through_db_strings() {
        for status in [
            ArchivoStatusDto::Active,
            ArchivoStatusDto::Inactive,
            ArchivoStatusDto::Archived,
        ] {
            assert_eq!(ArchivoStatusDto::from_db(status.as_str()), status);
        }
        // Unknown values fall back to active
        assert_eq!(ArchivoStatusDto::from_db("???"), ArchivoStatusDto::Active);
    }

    #[test]
    fn update_dto_detects_empty_payload() {
        let dto = UpdateArchivoDto {
            nombre_archivo: None,
            extension: None,
            estado: None,
        };
        assert!(!dto.has_updates());

        let dto = UpdateArchivoDto {
            nombre_archivo: None,
            extension: None,
            estado: Some(ArchivoStatusDto::Archived),
        };
        assert!(dto.has_updates());
    }
}
