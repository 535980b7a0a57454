use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::user::{Role, UpdateUserParams, User},
    service::auth::validate_email,
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_by_id(&self, id: i32) -> Result<User, AppError> {
        UserRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", id)))
    }

    pub async fn get_clients(&self) -> Result<Vec<User>, AppError> {
        Ok(UserRepository::new(self.db)
            .get_by_roles(&[Role::Client])
            .await?)
    }

    pub async fn get_employees(&self) -> Result<Vec<User>, AppError> {
        Ok(UserRepository::new(self.db)
            .get_by_roles(&[Role::Employee])
            .await?)
    }

    /// Updates a user's profile; the email must stay unique.
    pub async fn update(&self, params: UpdateUserParams) -> Result<User, AppError> {
        let email = params.email.trim().to_string();
        validate_email(&email)?;

        let user_repo = UserRepository::new(self.db);
        if user_repo.email_taken(&email, Some(params.id)).await? {
            return Err(AppError::BadRequest(format!(
                "A user with email {} already exists",
                email
            )));
        }

        let id = params.id;
        user_repo
            .update(UpdateUserParams { email, ..params })
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", id)))
    }

    /// Deletes a user along with their bookings
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !UserRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound(format!("User {} not found", id)));
        }

        tracing::info!("Deleted user {}", id);

        Ok(())
    }
}
