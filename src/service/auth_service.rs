use tracing::{error, info, instrument, warn};

use crate::config::AdminUserConfig;
use crate::model::user::{NewUser, Role, User, UserStatus};
use crate::repository::repository_error::RepositoryError;
use crate::repository::seed;
use crate::repository::user_repo::UserRepository;
use async_trait::async_trait;
use serde::Deserialize;
use std::sync::Arc;
use validator::Validate;

/// Accounts without a stored password (the seeded ones) authenticate with
/// this shared value.
pub const FALLBACK_PASSWORD: &str = "password";

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("User with this email already exists")]
    DuplicateEmail,

    #[error("Validation error: {0}")]
    Validation(String),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

#[derive(Debug, Deserialize, Validate)]
pub struct SignupRequest {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    pub password: String,
}

#[async_trait]
pub trait AuthService: Send + Sync {
    async fn login(&self, email: &str, password: &str) -> Result<User, AuthError>;
    async fn signup(&self, request: SignupRequest) -> Result<User, AuthError>;
}

pub struct AuthServiceImpl {
    user_repo: Arc<dyn UserRepository>,
    admin: AdminUserConfig,
}

impl AuthServiceImpl {
    pub fn new(user_repo: Arc<dyn UserRepository>, admin: AdminUserConfig) -> Self {
        Self { user_repo, admin }
    }
}

#[async_trait]
impl AuthService for AuthServiceImpl {
    /// Checks the supplied credentials against the live collection, falling
    /// back to the configured admin pair.
    ///
    /// The admin fallback resolves to the first bootstrap record without
    /// consulting the store at all, so it succeeds even after that record was
    /// edited or deleted. Known inconsistency, kept for compatibility.
    #[instrument(skip(self, password), fields(email = %email))]
    async fn login(&self, email: &str, password: &str) -> Result<User, AuthError> {
        info!("User login attempt");
        if let Some(user) = self.user_repo.find_by_email(email).await? {
            let credentials_ok = match &user.password {
                Some(stored) => stored == password,
                None => password == FALLBACK_PASSWORD,
            };
            if credentials_ok {
                info!("User logged in successfully");
                return Ok(user);
            }
        }

        if email == self.admin.email && password == self.admin.password {
            warn!("Fallback admin credentials used, returning bootstrap admin record");
            let mut bootstrap = seed::bootstrap_users();
            return Ok(bootstrap.remove(0));
        }

        error!("Invalid credentials for {}", email);
        Err(AuthError::InvalidCredentials)
    }

    /// Creates a Member/Active account, rejecting emails already present in
    /// the collection (exact, case-sensitive match). The plaintext password
    /// is retained on the record; this is mock auth by contract.
    #[instrument(skip(self, request), fields(email = %request.email))]
    async fn signup(&self, request: SignupRequest) -> Result<User, AuthError> {
        info!("Registering new user");
        request
            .validate()
            .map_err(|e| AuthError::Validation(e.to_string()))?;

        if self.user_repo.find_by_email(&request.email).await?.is_some() {
            warn!("Signup rejected, email already registered");
            return Err(AuthError::DuplicateEmail);
        }

        let user = self
            .user_repo
            .insert(NewUser {
                name: request.name,
                email: request.email,
                role: Role::Member,
                status: UserStatus::Active,
                avatar: None,
                password: Some(request.password),
            })
            .await?;
        info!("User {} registered successfully", user.id);
        Ok(user)
    }
}
