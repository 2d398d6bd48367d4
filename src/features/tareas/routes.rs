use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::tareas::handlers;
use crate::features::tareas::services::TareaService;

/// Create routes for the tareas feature
pub fn routes(service: Arc<TareaService>) -> Router {
    Router::new()
        .route(
            "/api/tareas",
            get(handlers::list_tareas).post(handlers::create_tarea),
        )
        .route(
            "/api/tareas/{id}",
            get(handlers::get_tarea)
                .put(handlers::update_tarea)
                .delete(handlers::delete_tarea),
        )
        .with_state(service)
}
