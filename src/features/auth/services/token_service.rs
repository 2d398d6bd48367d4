use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

use crate::core::config::AuthConfig;
use crate::core::error::{AppError, Result};
use crate::features::auth::model::{AuthenticatedUser, Claims};

/// Issues and validates HS256 access tokens
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    token_ttl_secs: i64,
    leeway_secs: u64,
}

impl TokenService {
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            token_ttl_secs: config.token_ttl.as_secs() as i64,
            leeway_secs: config.jwt_leeway.as_secs(),
        }
    }

    /// Create an access token for the user. Returns (token, expires_in_secs).
    pub fn issue_token(&self, user_id: Uuid, email: &str) -> Result<(String, i64)> {
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: user_id.to_string(),
            email: email.to_string(),
            iat: now,
            exp: now + self.token_ttl_secs,
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AppError::Internal(format!("Failed to sign token: {}", e)))?;

        Ok((token, self.token_ttl_secs))
    }

    /// Validate a bearer token and extract the authenticated user
    pub fn validate_token(&self, token: &str) -> Result<AuthenticatedUser> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = self.leeway_secs;
        validation.set_required_spec_claims(&["exp"]);

        let data = decode::<Claims>(token, &self.decoding_key, &validation)
            .map_err(|e| AppError::Unauthorized(format!("Invalid token: {}", e)))?;

        let sub = Uuid::parse_str(&data.claims.sub)
            .map_err(|_| AppError::Unauthorized("Invalid token subject".to_string()))?;

        Ok(AuthenticatedUser {
            sub,
            email: data.claims.email,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn test_service() -> TokenService {
        TokenService::new(&AuthConfig {
            jwt_secret: "0123456789abcdef0123456789abcdef".to_string(),
            token_ttl: Duration::from_secs(3600),
            jwt_leeway: Duration::from_secs(0),
        })
    }

    #[test]
    fn issued_token_round_trips() {
        let service = test_service();
        let user_id = Uuid::new_v4();

        let (token, expires_in) = service.issue_token(user_id, "ana@edu.do").unwrap();
        assert_eq!(expires_in, 3600);

        let user = service.validate_token(&token).unwrap();
        assert_eq!(user.sub, user_id);
        assert_eq!(user.email, "ana@edu.do");
    }

    #[test]
    fn garbage_token_is_rejected() {
        let service = test_service();
        let err = service.validate_token("not-a-jwt").unwrap_err();
        assert!(matches!(err, AppError::Unauthorized(_)));
    }

    #[test]
    fn token_from_other_secret_is_rejected() {
        let service = test_service();
        let other = TokenService::new(&AuthConfig {
            jwt_secret: "ffffffffffffffffffffffffffffffff".to_string(),
            token_ttl: Duration::from_secs(3600),
            jwt_leeway: Duration::from_secs(0),
        });

        let (token, _) = other.issue_token(Uuid::new_v4(), "x@y.z").unwrap();
        assert!(service.validate_token(&token).is_err());
    }
}
