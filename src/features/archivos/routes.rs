use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::features::archivos::handlers::{
    delete_archivo, get_archivo, list_archivos, update_archivo, upload_archivo,
};
use crate::features::archivos::services::ArchivoService;

/// Create routes for the archivos feature
pub fn routes(service: Arc<ArchivoService>, max_file_size: usize) -> Router {
    Router::new()
        .route(
            "/api/archivos/upload",
            // Allow body size up to the configured limit + buffer for multipart overhead
            post(upload_archivo).layer(DefaultBodyLimit::max(max_file_size + 1024 * 1024)),
        )
        .route("/api/archivos/usuario/{id_usuario}", get(list_archivos))
        .route(
            "/api/archivos/{id}",
            get(get_archivo).put(update_archivo).delete(delete_archivo),
        )
        .with_state(service)
}
