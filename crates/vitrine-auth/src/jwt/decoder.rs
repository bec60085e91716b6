//! JWT token validation.
//!
//! Validation is stateless: a token is valid if its signature checks out,
//! it has not expired, and it carries the expected token type.

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

use vitrine_core::config::auth::AuthConfig;
use vitrine_core::error::AppError;

use super::claims::{Claims, TokenType};

/// Validates JWT tokens.
#[derive(Clone)]
pub struct JwtDecoder {
    /// HMAC secret key for verification.
    decoding_key: DecodingKey,
    /// Validation configuration.
    validation: Validation,
}

impl std::fmt::Debug for JwtDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtDecoder")
            .field("validation", &self.validation)
            .finish()
    }
}

impl JwtDecoder {
    /// Creates a new decoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 5; // 5 seconds leeway for clock skew

        Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
        }
    }

    /// Decodes and validates an access token string.
    pub fn decode_access_token(&self, token: &str) -> Result<Claims, AppError> {
        let claims = self.decode_token(token)?;

        if claims.token_type != TokenType::Access {
            return Err(AppError::unauthorized(
                "Invalid token type: expected access token",
            ));
        }

        Ok(claims)
    }

    /// Decodes and validates a refresh token string.
    pub fn decode_refresh_token(&self, token: &str) -> Result<Claims, AppError> {
        let claims = self.decode_token(token)?;

        if claims.token_type != TokenType::Refresh {
            return Err(AppError::unauthorized(
                "Invalid token type: expected refresh token",
            ));
        }

        Ok(claims)
    }

    /// Internal decode without type checking.
    fn decode_token(&self, token: &str) -> Result<Claims, AppError> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                        AppError::unauthorized("Token has expired")
                    }
                    jsonwebtoken::errors::ErrorKind::InvalidToken => {
                        AppError::unauthorized("Invalid token format")
                    }
                    jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                        AppError::unauthorized("Invalid token signature")
                    }
                    _ => AppError::unauthorized(format!("Token validation failed: {e}")),
                }
            })?;

        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jwt::encoder::JwtEncoder;
    use uuid::Uuid;
    use vitrine_entity::user::UserRole;

    fn config(secret: &str) -> AuthConfig {
        AuthConfig {
            jwt_secret: secret.to_string(),
            ..AuthConfig::default()
        }
    }

    #[test]
    fn test_roundtrip() {
        let cfg = config("test-secret");
        let encoder = JwtEncoder::new(&cfg);
        let decoder = JwtDecoder::new(&cfg);

        let user_id = Uuid::new_v4();
        let pair = encoder
            .generate_token_pair(user_id, UserRole::Client, "client@example.com")
            .unwrap();

        let claims = decoder.decode_access_token(&pair.access_token).unwrap();
        assert_eq!(claims.sub, user_id);
        assert_eq!(claims.role, UserRole::Client);
        assert_eq!(claims.email, "client@example.com");
        assert!(!claims.is_expired());
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let encoder = JwtEncoder::new(&config("secret-a"));
        let decoder = JwtDecoder::new(&config("secret-b"));

        let pair = encoder
            .generate_token_pair(Uuid::new_v4(), UserRole::Admin, "admin@example.com")
            .unwrap();
        assert!(decoder.decode_access_token(&pair.access_token).is_err());
    }

    #[test]
    fn test_token_type_enforced() {
        let cfg = config("test-secret");
        let encoder = JwtEncoder::new(&cfg);
        let decoder = JwtDecoder::new(&cfg);

        let pair = encoder
            .generate_token_pair(Uuid::new_v4(), UserRole::Client, "client@example.com")
            .unwrap();

        assert!(decoder.decode_access_token(&pair.refresh_token).is_err());
        assert!(decoder.decode_refresh_token(&pair.access_token).is_err());
    }

    #[test]
    fn test_garbage_rejected() {
        let decoder = JwtDecoder::new(&config("test-secret"));
        assert!(decoder.decode_access_token("not-a-token").is_err());
    }
}
