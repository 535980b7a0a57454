//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing user accounts. Password hashes
//! are only read through dedicated methods and never travel inside a `User`.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::user::{CreateUserParams, Role, UpdateUserParams, User};

/// Repository providing database operations for user management.
pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection or open transaction
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new user account.
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(DbErr)` - Database error, including a unique violation on email
    pub async fn create(&self, params: CreateUserParams) -> Result<User, DbErr> {
        let entity = entity::user::ActiveModel {
            name: ActiveValue::Set(params.name),
            email: ActiveValue::Set(params.email),
            password_hash: ActiveValue::Set(params.password_hash),
            role: ActiveValue::Set(params.role.to_string()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        User::from_entity(entity)
    }

    /// Finds a user by id.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that id
    /// - `Err(DbErr)` - Database error or unknown stored role
    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, DbErr> {
        entity::prelude::User::find_by_id(id)
            .one(self.db)
            .await?
            .map(User::from_entity)
            .transpose()
    }

    /// Finds a user by email together with their password hash.
    ///
    /// Used only by login; the hash is returned separately from the domain model.
    pub async fn find_with_password_hash_by_email(
        &self,
        email: &str,
    ) -> Result<Option<(User, String)>, DbErr> {
        let Some(entity) = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let password_hash = entity.password_hash.clone();

        Ok(Some((User::from_entity(entity)?, password_hash)))
    }

    pub async fn get_password_hash(&self, id: i32) -> Result<Option<String>, DbErr> {
        let entity = entity::prelude::User::find_by_id(id).one(self.db).await?;

        Ok(entity.map(|user| user.password_hash))
    }

    /// Checks whether an email is used by any account other than `exclude`.
    pub async fn email_taken(&self, email: &str, exclude: Option<i32>) -> Result<bool, DbErr> {
        let mut query =
            entity::prelude::User::find().filter(entity::user::Column::Email.eq(email));

        if let Some(user_id) = exclude {
            query = query.filter(entity::user::Column::Id.ne(user_id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    /// Lists users holding any of the given roles, ordered by name.
    pub async fn get_by_roles(&self, roles: &[Role]) -> Result<Vec<User>, DbErr> {
        let role_names: Vec<&str> = roles.iter().map(Role::as_str).collect();

        entity::prelude::User::find()
            .filter(entity::user::Column::Role.is_in(role_names))
            .order_by_asc(entity::user::Column::Name)
            .order_by_asc(entity::user::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(User::from_entity)
            .collect()
    }

    /// Updates name, email and, when given, role of a user.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - The updated user
    /// - `Ok(None)` - No user with that id
    pub async fn update(&self, params: UpdateUserParams) -> Result<Option<User>, DbErr> {
        let Some(existing) = entity::prelude::User::find_by_id(params.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::user::ActiveModel = existing.into();
        active_model.name = ActiveValue::Set(params.name);
        active_model.email = ActiveValue::Set(params.email);
        if let Some(role) = params.role {
            active_model.role = ActiveValue::Set(role.to_string());
        }

        let entity = active_model.update(self.db).await?;

        Ok(Some(User::from_entity(entity)?))
    }

    /// Replaces the stored password hash of a user.
    ///
    /// # Returns
    /// - `Ok(true)` - Hash replaced
    /// - `Ok(false)` - No user with that id
    pub async fn update_password_hash(&self, id: i32, password_hash: String) -> Result<bool, DbErr> {
        let result = entity::prelude::User::update_many()
            .filter(entity::user::Column::Id.eq(id))
            .col_expr(
                entity::user::Column::PasswordHash,
                sea_orm::sea_query::Expr::value(password_hash),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Deletes a user. Their bookings are removed by the foreign key cascade.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::User::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Checks if any administrator account exists.
    ///
    /// Used during startup to decide whether the configured admin must be created.
    pub async fn admin_exists(&self) -> Result<bool, DbErr> {
        let admin_count = entity::prelude::User::find()
            .filter(entity::user::Column::Role.eq(Role::Administrator.as_str()))
            .count(self.db)
            .await?;

        Ok(admin_count > 0)
    }

    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find_by_id(id).count(self.db).await?;

        Ok(count > 0)
    }
}
