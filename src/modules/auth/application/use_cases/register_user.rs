use async_trait::async_trait;
use chrono::{DateTime, Utc};
use regex::Regex;
use std::sync::{Arc, OnceLock};

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::ports::outgoing::{
    CreateUserData, PasswordHasher, UserRepository, UserRepositoryError,
};

const MIN_PASSWORD_LEN: usize = 8;
const MAX_PASSWORD_LEN: usize = 128;

static USERNAME_PATTERN: OnceLock<Regex> = OnceLock::new();

fn username_pattern() -> &'static Regex {
    USERNAME_PATTERN.get_or_init(|| {
        Regex::new(r"^[A-Za-z0-9_-]{3,30}$").expect("username pattern compiles")
    })
}

// ========================= Command =========================

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RegisterUserCommandError {
    #[error("Username must be 3-30 characters of letters, digits, '_' or '-'")]
    InvalidUsername,

    #[error("Password must be between {MIN_PASSWORD_LEN} and {MAX_PASSWORD_LEN} characters")]
    InvalidPasswordLength,
}

/// Validated registration input.
#[derive(Debug, Clone)]
pub struct RegisterUserCommand {
    username: String,
    password: String,
}

impl RegisterUserCommand {
    pub fn new(username: String, password: String) -> Result<Self, RegisterUserCommandError> {
        let username = username.trim().to_string();
        if !username_pattern().is_match(&username) {
            return Err(RegisterUserCommandError::InvalidUsername);
        }

        let len = password.chars().count();
        if !(MIN_PASSWORD_LEN..=MAX_PASSWORD_LEN).contains(&len) {
            return Err(RegisterUserCommandError::InvalidPasswordLength);
        }

        Ok(Self { username, password })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

// ========================= Use Case =========================

#[derive(Debug, Clone, thiserror::Error)]
pub enum RegisterUserError {
    #[error("Username is already taken")]
    UsernameTaken,

    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[derive(Debug, Clone)]
pub struct RegisteredUser {
    pub id: UserId,
    pub username: String,
    pub created_at: DateTime<Utc>,
}

#[async_trait]
pub trait IRegisterUserUseCase: Send + Sync {
    async fn execute(&self, command: RegisterUserCommand)
        -> Result<RegisteredUser, RegisterUserError>;
}

#[derive(Clone)]
pub struct RegisterUserUseCase<R>
where
    R: UserRepository,
{
    repository: R,
    password_hasher: Arc<dyn PasswordHasher>,
}

impl<R> RegisterUserUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repository: R, password_hasher: Arc<dyn PasswordHasher>) -> Self {
        Self {
            repository,
            password_hasher,
        }
    }
}

#[async_trait]
impl<R> IRegisterUserUseCase for RegisterUserUseCase<R>
where
    R: UserRepository,
{
    async fn execute(
        &self,
        command: RegisterUserCommand,
    ) -> Result<RegisteredUser, RegisterUserError> {
        let password_hash = self
            .password_hasher
            .hash_password(command.password())
            .await
            .map_err(|e| RegisterUserError::HashingFailed(e.to_string()))?;

        // The unique index on users.username decides races between concurrent sign-ups
        let created = self
            .repository
            .create_user(CreateUserData {
                username: command.username().to_string(),
                password_hash,
            })
            .await
            .map_err(|e| match e {
                UserRepositoryError::UserAlreadyExists => RegisterUserError::UsernameTaken,
                UserRepositoryError::DatabaseError(msg) => RegisterUserError::RepositoryError(msg),
            })?;

        Ok(RegisteredUser {
            id: created.id,
            username: created.username,
            created_at: created.created_at,
        })
    }
}
