#[cfg(test)]
use crate::features::auth::model::AuthenticatedUser;

#[cfg(test)]
use axum::{extract::Request, middleware::Next, response::Response, Router};

#[cfg(test)]
use uuid::Uuid;

/// Fixed user id used by handler tests
#[cfg(test)]
pub fn test_user_id() -> Uuid {
    Uuid::parse_str("00000000-0000-4000-8000-000000000001").unwrap()
}

#[cfg(test)]
pub fn create_test_user() -> AuthenticatedUser {
    AuthenticatedUser {
        sub: test_user_id(),
        email: "test@acadexpro.edu".to_string(),
    }
}

#[cfg(test)]
async fn inject_test_user_middleware(mut request: Request, next: Next) -> Response {
    request.extensions_mut().insert(create_test_user());
    next.run(request).await
}

/// Wrap a router so every request carries an authenticated test user,
/// bypassing the JWT middleware.
#[cfg(test)]
pub fn with_test_auth(router: Router) -> Router {
    router.layer(axum::middleware::from_fn(inject_test_user_middleware))
}
