use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::users::handlers;
use crate::features::users::services::UserService;

/// Create routes for the users feature
pub fn routes(service: Arc<UserService>) -> Router {
    Router::new()
        .route(
            "/api/users/{id}",
            get(handlers::get_user).put(handlers::update_user),
        )
        .with_state(service)
}
