use std::sync::Arc;

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::features::pomodoro::handlers;
use crate::features::pomodoro::services::SesionService;

/// Create routes for the pomodoro feature
pub fn routes(service: Arc<SesionService>) -> Router {
    Router::new()
        .route("/api/sesiones", post(handlers::create_sesion))
        .route(
            "/api/sesiones/usuario/{id_usuario}",
            get(handlers::list_sesiones_by_usuario),
        )
        .route(
            "/api/sesiones/materia/{id_materia}",
            get(handlers::list_sesiones_by_materia),
        )
        .route(
            "/api/sesiones/tarea/{id_tarea}",
            get(handlers::list_sesiones_by_tarea),
        )
        .route("/api/sesiones/{id}", delete(handlers::delete_sesion))
        .with_state(service)
}
