use std::sync::Arc;

use axum::{
    routing::{delete, get},
    Router,
};

use crate::features::grupos::handlers;
use crate::features::grupos::services::GrupoService;

/// Create routes for the grupos feature
pub fn routes(service: Arc<GrupoService>) -> Router {
    Router::new()
        .route(
            "/api/grupos",
            get(handlers::list_grupos).post(handlers::create_grupo),
        )
        .route(
            "/api/grupos/{id}",
            get(handlers::get_grupo)
                .put(handlers::update_grupo)
                .delete(handlers::delete_grupo),
        )
        .route(
            "/api/grupos/{id}/miembros",
            get(handlers::list_miembros).post(handlers::add_miembro),
        )
        .route(
            "/api/grupos/{id}/miembros/{id_usuario}",
            delete(handlers::remove_miembro),
        )
        .with_state(service)
}
