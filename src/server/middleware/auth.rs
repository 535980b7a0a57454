use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::user::{Role, User},
};

/// Access requirement checked by `AuthGuard::require`.
///
/// The `Owner*` variants carry the id of the user account a request targets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Permission {
    /// Employee or administrator.
    Staff,
    Admin,
    /// The session user is the targeted account.
    Owner(i32),
    OwnerOrAdmin(i32),
    OwnerOrStaff(i32),
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Loads the session user and checks every permission.
    ///
    /// An empty list only requires a logged-in user.
    ///
    /// # Returns
    /// - `Ok(User)` - The logged-in user satisfying all permissions
    /// - `Err(AuthError::UserNotInSession)` - Nobody is logged in
    /// - `Err(AuthError::UserNotInDatabase)` - The session user was deleted
    /// - `Err(AuthError::AccessDenied)` - A permission is not met
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let Some(user) = UserRepository::new(self.db).find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        for permission in permissions {
            if !is_granted(&user, *permission) {
                return Err(AuthError::AccessDenied(
                    user.id,
                    format!("{} lacks permission {:?}", user.role, permission),
                )
                .into());
            }
        }

        Ok(user)
    }
}

fn is_granted(user: &User, permission: Permission) -> bool {
    let is_admin = user.role == Role::Administrator;

    match permission {
        Permission::Staff => user.role.is_staff(),
        Permission::Admin => is_admin,
        Permission::Owner(id) => user.id == id,
        Permission::OwnerOrAdmin(id) => user.id == id || is_admin,
        Permission::OwnerOrStaff(id) => user.id == id || user.role.is_staff(),
    }
}
