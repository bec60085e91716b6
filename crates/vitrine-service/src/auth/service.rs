//! Login, token refresh, and profile lookup.

use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use vitrine_auth::jwt::decoder::JwtDecoder;
use vitrine_auth::jwt::encoder::{JwtEncoder, TokenPair};
use vitrine_auth::password::hasher::PasswordHasher;
use vitrine_core::error::AppError;
use vitrine_core::result::AppResult;
use vitrine_database::store::UserStore;
use vitrine_entity::user::User;

use crate::context::Principal;

/// Result of a successful login.
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    /// The authenticated user.
    pub user: User,
    /// Freshly issued token pair.
    pub tokens: TokenPair,
}

/// Issues and renews credentials for both admins and clients.
///
/// One login flow serves every role; route-level gates decide what the
/// resulting principal may do.
#[derive(Debug, Clone)]
pub struct AuthService {
    users: Arc<dyn UserStore>,
    hasher: Arc<PasswordHasher>,
    encoder: Arc<JwtEncoder>,
    decoder: Arc<JwtDecoder>,
}

impl AuthService {
    /// Creates a new auth service.
    pub fn new(
        users: Arc<dyn UserStore>,
        hasher: Arc<PasswordHasher>,
        encoder: Arc<JwtEncoder>,
        decoder: Arc<JwtDecoder>,
    ) -> Self {
        Self {
            users,
            hasher,
            encoder,
            decoder,
        }
    }

    /// Authenticates by email and password and issues a token pair.
    pub async fn login(&self, email: &str, password: &str) -> AppResult<LoginOutcome> {
        let user = self
            .users
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::unauthorized("Invalid email or password"))?;

        if !user.can_login() {
            return Err(AppError::forbidden("Account is deactivated"));
        }

        let valid = self.hasher.verify_password(password, &user.password_hash)?;
        if !valid {
            return Err(AppError::unauthorized("Invalid email or password"));
        }

        let tokens = self
            .encoder
            .generate_token_pair(user.id, user.role, &user.email)?;

        self.users.record_login(user.id, Utc::now()).await?;

        info!(user_id = %user.id, role = %user.role, "User logged in");

        Ok(LoginOutcome { user, tokens })
    }

    /// Exchanges a valid refresh token for a new token pair.
    ///
    /// The user is re-loaded so a deactivated account cannot renew its
    /// credentials.
    pub async fn refresh(&self, refresh_token: &str) -> AppResult<TokenPair> {
        let claims = self.decoder.decode_refresh_token(refresh_token)?;

        let user = self
            .users
            .find_by_id(claims.user_id())
            .await?
            .ok_or_else(|| AppError::unauthorized("Unknown user"))?;

        if !user.can_login() {
            return Err(AppError::forbidden("Account is deactivated"));
        }

        self.encoder
            .generate_token_pair(user.id, user.role, &user.email)
    }

    /// Loads the profile for the authenticated principal.
    pub async fn profile(&self, principal: &Principal) -> AppResult<User> {
        self.users
            .find_by_id(principal.user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;
    use vitrine_core::config::auth::AuthConfig;
    use vitrine_core::error::ErrorKind;
    use vitrine_database::memory::MemoryUserStore;
    use vitrine_entity::user::{UserRole, UserStatus};

    fn service(users: Arc<MemoryUserStore>) -> AuthService {
        let config = AuthConfig::default();
        AuthService::new(
            users,
            Arc::new(PasswordHasher::new()),
            Arc::new(JwtEncoder::new(&config)),
            Arc::new(JwtDecoder::new(&config)),
        )
    }

    async fn seed_user(
        users: &MemoryUserStore,
        email: &str,
        password: &str,
        status: UserStatus,
    ) -> User {
        let hasher = PasswordHasher::new();
        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            email: email.to_string(),
            password_hash: hasher.hash_password(password).unwrap(),
            display_name: None,
            role: UserRole::Client,
            status,
            points_balance: 0,
            order_count: 0,
            created_at: now,
            updated_at: now,
            last_login_at: None,
        };
        users.create(&user).await.unwrap();
        user
    }

    #[tokio::test]
    async fn test_login_success_stamps_last_login() {
        let users = Arc::new(MemoryUserStore::new());
        let user = seed_user(&users, "client@example.com", "secret123", UserStatus::Active).await;
        let svc = service(Arc::clone(&users));

        let outcome = svc.login("client@example.com", "secret123").await.unwrap();
        assert_eq!(outcome.user.id, user.id);
        assert!(!outcome.tokens.access_token.is_empty());

        let reloaded = users.find_by_id(user.id).await.unwrap().unwrap();
        assert!(reloaded.last_login_at.is_some());
    }

    #[tokio::test]
    async fn test_login_wrong_password() {
        let users = Arc::new(MemoryUserStore::new());
        seed_user(&users, "client@example.com", "secret123", UserStatus::Active).await;
        let svc = service(users);

        let err = svc
            .login("client@example.com", "wrong")
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Unauthorized);
    }

    #[tokio::test]
    async fn test_login_inactive_account() {
        let users = Arc::new(MemoryUserStore::new());
        seed_user(
            &users,
            "client@example.com",
            "secret123",
            UserStatus::Inactive,
        )
        .await;
        let svc = service(users);

        let err = svc
            .login("client@example.com", "secret123")
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Forbidden);
    }

    #[tokio::test]
    async fn test_refresh_roundtrip() {
        let users = Arc::new(MemoryUserStore::new());
        seed_user(&users, "client@example.com", "secret123", UserStatus::Active).await;
        let svc = service(users);

        let outcome = svc.login("client@example.com", "secret123").await.unwrap();
        let renewed = svc.refresh(&outcome.tokens.refresh_token).await.unwrap();
        assert!(!renewed.access_token.is_empty());

        // An access token is not accepted as a refresh token.
        assert!(svc.refresh(&outcome.tokens.access_token).await.is_err());
    }
}
