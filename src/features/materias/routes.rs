use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::materias::handlers;
use crate::features::materias::services::MateriaService;

/// Create routes for the materias feature
pub fn routes(service: Arc<MateriaService>) -> Router {
    Router::new()
        .route(
            "/api/materias",
            get(handlers::list_materias).post(handlers::create_materia),
        )
        .route(
            "/api/materias/{id}",
            get(handlers::get_materia)
                .put(handlers::update_materia)
                .delete(handlers::delete_materia),
        )
        .with_state(service)
}
