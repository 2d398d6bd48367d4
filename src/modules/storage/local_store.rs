//! Owner-scoped local-disk document store
//!
//! Persists uploaded files under `<uploads_root>/<owner_id>/` and derives
//! deterministic public URLs for retrieval via the static file layer.

use std::path::{Component, Path, PathBuf};

use chrono::Utc;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::core::config::StorageConfig;
use crate::core::error::{AppError, Result};

/// A file persisted on disk, ready for metadata bookkeeping
#[derive(Debug, Clone)]
pub struct StoredObject {
    /// Path relative to the uploads root (`<owner_id>/<stored_name>`)
    pub relative_path: String,
    /// Generated collision-resistant filename
    pub stored_name: String,
    /// Number of bytes written
    pub size_bytes: i64,
}

/// Local-disk storage for uploaded documents
pub struct LocalStore {
    root: PathBuf,
    public_base_url: String,
}

impl LocalStore {
    pub fn new(config: &StorageConfig) -> Self {
        Self {
            root: config.uploads_root.clone(),
            public_base_url: config.public_base_url.clone(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Create the uploads root if missing. Called once at startup.
    pub async fn ensure_root(&self) -> Result<()> {
        tokio::fs::create_dir_all(&self.root)
            .await
            .map_err(|e| AppError::Storage(format!("Failed to create uploads root: {}", e)))?;
        info!("Uploads root ready: {}", self.root.display());
        Ok(())
    }

    /// Reduce an owner identifier to a single safe path segment.
    ///
    /// Only `[A-Za-z0-9_-]` survive, so separator and parent-directory
    /// sequences can never escape the uploads root.
    pub fn sanitize_owner_segment(owner_id: &str) -> Result<String> {
        let clean: String = owner_id
            .chars()
            .filter(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == '_')
            .collect();

        if clean.is_empty() {
            return Err(AppError::Validation(
                "Owner id is required for file storage".to_string(),
            ));
        }

        Ok(clean)
    }

    /// Generate a stored filename: `<unix-millis>-<8-hex>-<base>`.
    ///
    /// The random middle segment keeps two same-millisecond uploads of the
    /// same original name from shadowing each other.
    pub fn generate_stored_name(original_filename: &str) -> String {
        let base: String = original_filename
            .chars()
            .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
            .collect();
        let base = base.trim_matches('.').to_string();
        let base = if base.is_empty() {
            "archivo".to_string()
        } else {
            base
        };

        let suffix = Uuid::new_v4().simple().to_string();
        format!("{}-{}-{}", Utc::now().timestamp_millis(), &suffix[..8], base)
    }

    /// Persist `data` under the owner's directory.
    ///
    /// The owner id is validated before any filesystem effect; directory
    /// creation is idempotent and tolerates concurrent requests for the
    /// same owner. A partially written file is removed on error.
    pub async fn save(
        &self,
        owner_id: &str,
        original_filename: &str,
        data: &[u8],
    ) -> Result<StoredObject> {
        let owner_segment = Self::sanitize_owner_segment(owner_id)?;
        let stored_name = Self::generate_stored_name(original_filename);

        let dir = self.root.join(&owner_segment);
        tokio::fs::create_dir_all(&dir)
            .await
            .map_err(|e| AppError::Storage(format!("Failed to create owner directory: {}", e)))?;

        let path = dir.join(&stored_name);
        if let Err(e) = tokio::fs::write(&path, data).await {
            // Best-effort cleanup of a partial write
            if let Err(cleanup) = tokio::fs::remove_file(&path).await {
                if cleanup.kind() != std::io::ErrorKind::NotFound {
                    warn!(
                        "Failed to remove partial file {}: {}",
                        path.display(),
                        cleanup
                    );
                }
            }
            return Err(AppError::Storage(format!("Failed to write file: {}", e)));
        }

        debug!("File written: {} ({} bytes)", path.display(), data.len());

        Ok(StoredObject {
            relative_path: format!("{}/{}", owner_segment, stored_name),
            stored_name,
            size_bytes: data.len() as i64,
        })
    }

    /// Remove the bytes at `relative_path`.
    ///
    /// Idempotent: a missing file is Ok, so retried deletes and
    /// compensation paths cannot fail on it.
    pub async fn delete(&self, relative_path: &str) -> Result<()> {
        let path = self.resolve(relative_path)?;
        match tokio::fs::remove_file(&path).await {
            Ok(()) => {
                debug!("File removed: {}", path.display());
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AppError::Storage(format!("Failed to remove file: {}", e))),
        }
    }

    /// Deterministic retrieval URL for a stored path
    pub fn file_url(&self, relative_path: &str) -> String {
        format!("{}/{}", self.public_base_url, relative_path)
    }

    /// Join a stored relative path onto the root, rejecting traversal.
    fn resolve(&self, relative_path: &str) -> Result<PathBuf> {
        let rel = Path::new(relative_path);
        let traversal = rel
            .components()
            .any(|c| !matches!(c, Component::Normal(_)));
        if traversal || relative_path.is_empty() {
            return Err(AppError::Storage(format!(
                "Invalid stored path: {}",
                relative_path
            )));
        }
        Ok(self.root.join(rel))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn test_store(dir: &TempDir) -> LocalStore {
        LocalStore::new(&StorageConfig {
            uploads_root: dir.path().to_path_buf(),
            public_base_url: "http://localhost:3000/uploads".to_string(),
            allowed_mime_types: vec!["application/pdf".to_string()],
            max_file_size: 1024 * 1024,
        })
    }

    #[tokio::test]
    async fn save_writes_bytes_under_owner_directory() {
        let dir = TempDir::new().unwrap();
        let store = test_store(&dir);

        let stored = store.save("user-1", "notes.pdf", b"hello world").await.unwrap();

        assert!(stored.relative_path.starts_with("user-1/"));
        assert_eq!(stored.size_bytes, 11);

        let on_disk = tokio::fs::read(dir.path().join(&stored.relative_path))
            .await
            .unwrap();
        assert_eq!(on_disk, b"hello world");
    }

    #[tokio::test]
    async fn save_rejects_empty_owner_without_io() {
        let dir = TempDir::new().unwrap();
        let store = test_store(&dir);

        let err = store.save("", "notes.pdf", b"data").await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));

        // Nothing was created
        let mut entries = tokio::fs::read_dir(dir.path()).await.unwrap();
        assert!(entries.next_entry().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn malicious_owner_id_stays_inside_root() {
        let dir = TempDir::new().unwrap();
        let store = test_store(&dir);

        let stored = store
            .save("../../etc/passwd", "evil.pdf", b"x")
            .await
            .unwrap();

        // Separators and dots are stripped, so the directory is a plain segment
        assert_eq!(stored.relative_path.split('/').count(), 2);
        assert!(stored.relative_path.starts_with("etcpasswd/"));
        assert!(dir.path().join(&stored.relative_path).exists());
        assert!(!dir.path().parent().unwrap().join("etc").exists());
    }

    #[tokio::test]
    async fn same_filename_same_owner_never_collides() {
        let dir = TempDir::new().unwrap();
        let store = test_store(&dir);

        let a = store.save("u1", "tesis.pdf", b"first").await.unwrap();
        let b = store.save("u1", "tesis.pdf", b"second").await.unwrap();

        assert_ne!(a.relative_path, b.relative_path);
        assert!(dir.path().join(&a.relative_path).exists());
        assert!(dir.path().join(&b.relative_path).exists());
    }

    #[test]
    fn generated_names_differ_for_same_input() {
        let a = LocalStore::generate_stored_name("tesis.pdf");
        let b = LocalStore::generate_stored_name("tesis.pdf");
        assert_ne!(a, b);
        assert!(a.ends_with("tesis.pdf"));
    }

    #[tokio::test]
    async fn delete_removes_bytes_and_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let store = test_store(&dir);

        let stored = store.save("u1", "doc.pdf", b"bytes").await.unwrap();
        assert!(dir.path().join(&stored.relative_path).exists());

        store.delete(&stored.relative_path).await.unwrap();
        assert!(!dir.path().join(&stored.relative_path).exists());

        // Second delete of the same path is still Ok
        store.delete(&stored.relative_path).await.unwrap();
    }

    #[tokio::test]
    async fn delete_rejects_traversal_paths() {
        let dir = TempDir::new().unwrap();
        let store = test_store(&dir);

        let err = store.delete("../outside.txt").await.unwrap_err();
        assert!(matches!(err, AppError::Storage(_)));
    }

    #[test]
    fn file_url_is_deterministic() {
        let dir = TempDir::new().unwrap();
        let store = test_store(&dir);
        assert_eq!(
            store.file_url("u1/123-abc-doc.pdf"),
            "http://localhost:3000/uploads/u1/123-abc-doc.pdf"
        );
    }
}
