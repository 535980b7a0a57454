//! User domain models and parameters.
//!
//! Provides the user domain model, the role hierarchy used for access checks, and
//! parameter types for account creation and updates. Password hashes never leave the
//! repository inside a `User`.

use std::{fmt, str::FromStr};

use sea_orm::DbErr;

use crate::model::user::UserDto;

/// Account role.
///
/// Employees and administrators are staff; only administrators can manage other
/// staff accounts or change roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Client,
    Employee,
    Administrator,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Client => "Client",
            Self::Employee => "Employee",
            Self::Administrator => "Administrator",
        }
    }

    /// Whether the role belongs to cabin staff.
    pub fn is_staff(&self) -> bool {
        matches!(self, Self::Employee | Self::Administrator)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    /// Parses a role name, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "client" => Ok(Self::Client),
            "employee" => Ok(Self::Employee),
            "administrator" | "admin" => Ok(Self::Administrator),
            _ => Err(format!("Unknown role: {}", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub role: Role,
}

impl User {
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            name: self.name,
            email: self.email,
            role: self.role.to_string(),
        }
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(User)` - The converted user domain model
    /// - `Err(DbErr::Custom)` - Stored role is not a known role name
    pub fn from_entity(entity: entity::user::Model) -> Result<Self, DbErr> {
        let role = entity
            .role
            .parse::<Role>()
            .map_err(|e| DbErr::Custom(format!("User {}: {}", entity.id, e)))?;

        Ok(Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            role,
        })
    }
}

/// Parameters for inserting a user; the password must already be hashed.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateUserParams {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
}

/// Parameters for updating a user's profile.
///
/// `role` is `None` when the role should stay unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateUserParams {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub role: Option<Role>,
}
