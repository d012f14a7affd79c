use std::sync::Arc;

use argon2::Params;
use chrono::Utc;
use tracing::{debug, info, instrument, warn};

use super::domain::{Claims, Credentials, Login, User};
use super::errors::UserError;
use super::password;
use super::token::TokenSigner;
use crate::storage::UserStorage;

/// User service configuration
#[derive(Clone)]
pub struct AuthConfig {
    /// Shared HS256 secret, loaded once at startup.
    pub jwt_secret: String,
    /// Argon2 cost parameters for new hashes; `None` uses the argon2 defaults.
    pub hash_params: Option<Params>,
}

impl AuthConfig {
    pub fn new(jwt_secret: impl Into<String>) -> Self {
        Self { jwt_secret: jwt_secret.into(), hash_params: None }
    }
}

/// Registration, login and token validation, independent of web framework.
pub struct UserService<S: UserStorage + ?Sized> {
    storage: Arc<S>,
    signer: TokenSigner,
    hash_params: Option<Params>,
}

impl<S: UserStorage + ?Sized> UserService<S> {
    pub fn new(storage: Arc<S>, cfg: AuthConfig) -> Self {
        Self {
            storage,
            signer: TokenSigner::new(cfg.jwt_secret.as_bytes()),
            hash_params: cfg.hash_params,
        }
    }

    /// Register a new user. The password is stored as an Argon2 hash.
    ///
    /// # Examples
    /// ```
    /// use service::storage::MemoryUserStorage;
    /// use service::user::{AuthConfig, UserService, domain::Credentials};
    /// use std::sync::Arc;
    /// let svc = UserService::new(Arc::new(MemoryUserStorage::new()), AuthConfig::new("secret"));
    /// tokio_test::block_on(svc.create_user(Credentials::new("user@example.com", "Secret123"))).unwrap();
    /// let again = tokio_test::block_on(svc.create_user(Credentials::new("user@example.com", "other")));
    /// assert!(again.unwrap_err().is_user_exists());
    /// ```
    #[instrument(skip(self, credentials), fields(email = %credentials.email))]
    pub async fn create_user(&self, credentials: Credentials) -> Result<(), UserError> {
        let Credentials { email, password } = credentials;
        // Argon2 is CPU-bound; keep it off the async workers.
        let params = self.hash_params.clone();
        let password_hash = tokio::task::spawn_blocking(move || password::hash_password(&password, params.as_ref()))
            .await
            .map_err(|e| UserError::Hash(e.to_string()))?
            .map_err(|e| UserError::Hash(e.to_string()))?;
        let user = User { email, password_hash };

        match self.storage.create(user).await {
            Ok(()) => {
                info!("user_registered");
                Ok(())
            }
            Err(e) if e.is_already_exists() => {
                debug!("user exists");
                Err(UserError::UserExists)
            }
            Err(source) => Err(UserError::Storage { context: "create user", source }),
        }
    }

    /// Verify credentials and issue a signed token (`aud` = email, `iat` = now, no `exp`).
    ///
    /// # Examples
    /// ```
    /// use service::storage::MemoryUserStorage;
    /// use service::user::{AuthConfig, UserService, domain::Credentials};
    /// use std::sync::Arc;
    /// let svc = UserService::new(Arc::new(MemoryUserStorage::new()), AuthConfig::new("secret"));
    /// let creds = Credentials::new("u@e.com", "Passw0rd");
    /// tokio_test::block_on(svc.create_user(creds.clone())).unwrap();
    /// let login = tokio_test::block_on(svc.login(creds)).unwrap();
    /// assert!(tokio_test::block_on(svc.validate_token(&login.token)).is_ok());
    /// ```
    #[instrument(skip(self, credentials), fields(email = %credentials.email))]
    pub async fn login(&self, credentials: Credentials) -> Result<Login, UserError> {
        match self.storage.verify(&credentials).await {
            Ok(()) => {}
            Err(e) if e.is_invalid_info() => {
                debug!("credentials rejected");
                return Err(UserError::UserInvalid);
            }
            Err(source) => return Err(UserError::Storage { context: "verify user", source }),
        }

        let claims = Claims { aud: vec![credentials.email], iat: Utc::now().timestamp() };
        let token = self.signer.sign(&claims).map_err(|e| UserError::Signing(e.to_string()))?;
        info!("user_logged_in");
        Ok(Login { token })
    }

    /// Check the token signature. Any validly signed token is accepted.
    #[instrument(skip_all)]
    pub async fn validate_token(&self, token: &str) -> Result<Claims, UserError> {
        self.signer.verify(token).map_err(|e| {
            warn!(err = %e, "token validation failed");
            UserError::InvalidToken(e.to_string())
        })
    }
}
