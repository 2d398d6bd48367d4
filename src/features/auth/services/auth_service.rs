use argon2::password_hash::{rand_core::OsRng, PasswordHash, SaltString};
use argon2::{Argon2, PasswordHasher, PasswordVerifier};
use sqlx::PgPool;
use std::sync::Arc;
use tracing::info;

use crate::core::error::{AppError, Result};
use crate::features::auth::dtos::{AuthResponseDto, LoginRequestDto, RegisterRequestDto};
use crate::features::auth::services::TokenService;
use crate::features::users::models::Usuario;

/// Service for registration and credential verification
pub struct AuthService {
    pool: PgPool,
    tokens: Arc<TokenService>,
}

impl AuthService {
    pub fn new(pool: PgPool, tokens: Arc<TokenService>) -> Self {
        Self { pool, tokens }
    }

    /// Hash a password with a fresh salt
    pub fn hash_password(password: &str) -> Result<String> {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|h| h.to_string())
            .map_err(|e| AppError::Internal(format!("Failed to hash password: {}", e)))
    }

    /// Verify a password against a stored hash (constant-time)
    pub fn verify_password(password: &str, stored_hash: &str) -> bool {
        match PasswordHash::new(stored_hash) {
            Ok(parsed) => Argon2::default()
                .verify_password(password.as_bytes(), &parsed)
                .is_ok(),
            Err(_) => false,
        }
    }

    /// Register a new user and issue a token
    pub async fn register(&self, dto: RegisterRequestDto) -> Result<AuthResponseDto> {
        let password_hash = Self::hash_password(&dto.password)?;

        let user = sqlx::query_as::<_, Usuario>(
            r#"
            INSERT INTO usuarios (nombre, apellido, email, password_hash, carrera)
            VALUES ($1, $2, LOWER($3), $4, $5)
            RETURNING *
            "#,
        )
        .bind(&dto.nombre)
        .bind(&dto.apellido)
        .bind(&dto.email)
        .bind(&password_hash)
        .bind(&dto.carrera)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                AppError::Conflict("Email is already registered".to_string())
            }
            _ => {
                tracing::error!("Failed to register user: {:?}", e);
                AppError::Database(e)
            }
        })?;

        info!("User registered: id={}, email={}", user.id, user.email);

        self.auth_response(user)
    }

    /// Verify credentials and issue a token
    pub async fn login(&self, dto: LoginRequestDto) -> Result<AuthResponseDto> {
        let user = sqlx::query_as::<_, Usuario>(
            "SELECT * FROM usuarios WHERE email = LOWER($1) AND is_active = TRUE",
        )
        .bind(&dto.email)
        .fetch_optional(&self.pool)
        .await?;

        // Same error for unknown email and wrong password
        let user = user.ok_or_else(|| {
            AppError::Unauthorized("Invalid email or password".to_string())
        })?;

        if !Self::verify_password(&dto.password, &user.password_hash) {
            return Err(AppError::Unauthorized(
                "Invalid email or password".to_string(),
            ));
        }

        info!("User logged in: id={}", user.id);

        self.auth_response(user)
    }

    fn auth_response(&self, user: Usuario) -> Result<AuthResponseDto> {
        let (access_token, expires_in) = self.tokens.issue_token(user.id, &user.email)?;
        Ok(AuthResponseDto {
            access_token,
            token_type: "Bearer".to_string(),
            expires_in,
            user: user.into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_hash_round_trips() {
        let hash = AuthService::hash_password("correct horse battery").unwrap();
        assert_ne!(hash, "correct horse battery");
        assert!(AuthService::verify_password("correct horse battery", &hash));
        assert!(!AuthService::verify_password("wrong password", &hash));
    }

    #[test]
    fn two_hashes_of_same_password_differ() {
        let a = AuthService::hash_password("12345678").unwrap();
        let b = AuthService::hash_password("12345678").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn malformed_stored_hash_never_verifies() {
        assert!(!AuthService::verify_password("12345678", "plaintext-from-old-db"));
    }
}
