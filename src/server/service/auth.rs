//! Email and password authentication.
//!
//! Passwords are hashed with Argon2id using a random salt and stored as PHC strings.
//! Hashing is CPU bound, so it runs on the blocking thread pool.

use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::{CreateUserParams, Role, User},
};

/// Shortest password accepted at registration or password change.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Hashes a password into an Argon2id PHC string.
pub async fn hash_password(password: String) -> Result<String, AppError> {
    tokio::task::spawn_blocking(move || {
        let salt = SaltString::encode_b64(&rand::random::<[u8; 16]>())
            .map_err(|e| AppError::InternalError(format!("Failed to encode salt: {}", e)))?;

        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| AppError::InternalError(format!("Failed to hash password: {}", e)))
    })
    .await
    .map_err(|e| AppError::InternalError(format!("Password hashing task failed: {}", e)))?
}

/// Checks a password against a stored PHC string.
///
/// A hash that cannot be parsed never matches.
pub async fn verify_password(password: String, password_hash: String) -> Result<bool, AppError> {
    tokio::task::spawn_blocking(move || {
        let Ok(parsed) = PasswordHash::new(&password_hash) else {
            return false;
        };

        Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok()
    })
    .await
    .map_err(|e| AppError::InternalError(format!("Password verification task failed: {}", e)))
}

fn validate_password(password: &str) -> Result<(), AppError> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(AppError::BadRequest(format!(
            "Password must be at least {} characters long",
            MIN_PASSWORD_LENGTH
        )));
    }

    Ok(())
}

/// Minimal shape check; deliverability is not verified.
pub fn validate_email(email: &str) -> Result<(), AppError> {
    let valid = email
        .split_once('@')
        .is_some_and(|(local, domain)| !local.is_empty() && domain.contains('.'));

    if !valid {
        return Err(AppError::BadRequest(format!("Invalid email address: {}", email)));
    }

    Ok(())
}

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new client account.
    ///
    /// Self-registration always creates a `Client`; staff roles are granted by an
    /// administrator afterwards.
    ///
    /// # Returns
    /// - `Ok(User)` - The created account
    /// - `Err(AppError::BadRequest)` - Invalid email, short password, or email in use
    pub async fn register(
        &self,
        name: String,
        email: String,
        password: String,
    ) -> Result<User, AppError> {
        self.create_account(name, email, password, Role::Client)
            .await
    }

    /// Creates an account with an explicit role.
    ///
    /// Used for registration and for bootstrapping the administrator at startup.
    pub async fn create_account(
        &self,
        name: String,
        email: String,
        password: String,
        role: Role,
    ) -> Result<User, AppError> {
        let email = email.trim().to_string();
        validate_email(&email)?;
        validate_password(&password)?;

        let user_repo = UserRepository::new(self.db);
        if user_repo.email_taken(&email, None).await? {
            return Err(AppError::BadRequest(format!(
                "A user with email {} already exists",
                email
            )));
        }

        let password_hash = hash_password(password).await?;
        let user = user_repo
            .create(CreateUserParams {
                name,
                email,
                password_hash,
                role,
            })
            .await?;

        tracing::info!("Created {} account {}", user.role, user.id);

        Ok(user)
    }

    /// Verifies credentials and returns the matching user.
    ///
    /// Unknown email and wrong password produce the same error.
    pub async fn login(&self, email: &str, password: String) -> Result<User, AppError> {
        let Some((user, password_hash)) = UserRepository::new(self.db)
            .find_with_password_hash_by_email(email.trim())
            .await?
        else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(password, password_hash).await? {
            return Err(AuthError::InvalidCredentials.into());
        }

        Ok(user)
    }

    /// Replaces a user's password after verifying the old one.
    pub async fn change_password(
        &self,
        user_id: i32,
        old_password: String,
        new_password: String,
    ) -> Result<(), AppError> {
        let user_repo = UserRepository::new(self.db);

        let password_hash = user_repo
            .get_password_hash(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", user_id)))?;

        if !verify_password(old_password, password_hash).await? {
            return Err(AuthError::IncorrectPassword(user_id).into());
        }

        validate_password(&new_password)?;

        let new_hash = hash_password(new_password).await?;
        user_repo.update_password_hash(user_id, new_hash).await?;

        tracing::info!("Changed password of user {}", user_id);

        Ok(())
    }
}
