use super::*;

/// Tests that a request without a logged-in user is rejected.
///
/// Expected: Err(UserNotInSession)
#[tokio::test]
async fn fails_without_session_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let result = AuthGuard::new(db, session).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInSession))
    ));

    Ok(())
}

/// Tests that a session pointing at a deleted user is rejected.
///
/// Expected: Err(UserNotInDatabase)
#[tokio::test]
async fn fails_for_deleted_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    AuthSession::new(session).set_user_id(9999).await?;

    let result = AuthGuard::new(db, session).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(9999)))
    ));

    Ok(())
}

/// Tests that a logged-in client passes when no permission is required.
///
/// Expected: Ok(User)
#[tokio::test]
async fn returns_logged_in_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::create_user(db).await?;
    AuthSession::new(session).set_user_id(user.id).await?;

    let result = AuthGuard::new(db, session).require(&[]).await?;

    assert_eq!(result.id, user.id);
    assert_eq!(result.role, Role::Client);

    Ok(())
}

/// Tests the staff permission for each role.
///
/// Expected: AccessDenied for a client, Ok for an employee
#[tokio::test]
async fn staff_requires_employee_or_administrator() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let client = factory::create_user(db).await?;
    let employee = factory::user::UserFactory::new(db)
        .role("Employee")
        .build()
        .await?;

    let auth_session = AuthSession::new(session);
    let guard = AuthGuard::new(db, session);

    auth_session.set_user_id(client.id).await?;
    assert!(matches!(
        guard.require(&[Permission::Staff]).await,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    auth_session.set_user_id(employee.id).await?;
    assert!(guard.require(&[Permission::Staff]).await.is_ok());

    Ok(())
}

/// Tests that employees are not administrators.
///
/// Expected: AccessDenied for an employee, Ok for an administrator
#[tokio::test]
async fn admin_requires_administrator() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let employee = factory::user::UserFactory::new(db)
        .role("Employee")
        .build()
        .await?;
    let admin = factory::user::UserFactory::new(db)
        .role("Administrator")
        .build()
        .await?;

    let auth_session = AuthSession::new(session);
    let guard = AuthGuard::new(db, session);

    auth_session.set_user_id(employee.id).await?;
    assert!(guard.require(&[Permission::Admin]).await.is_err());

    auth_session.set_user_id(admin.id).await?;
    assert!(guard.require(&[Permission::Admin]).await.is_ok());

    Ok(())
}

/// Tests owner-based permissions against another user's account.
///
/// Expected: a client may act on their own account only, staff may read others,
/// only administrators may manage others
#[tokio::test]
async fn owner_permissions() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let client = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let employee = factory::user::UserFactory::new(db)
        .role("Employee")
        .build()
        .await?;

    let auth_session = AuthSession::new(session);
    let guard = AuthGuard::new(db, session);

    auth_session.set_user_id(client.id).await?;
    assert!(guard.require(&[Permission::Owner(client.id)]).await.is_ok());
    assert!(guard.require(&[Permission::Owner(other.id)]).await.is_err());
    assert!(guard
        .require(&[Permission::OwnerOrStaff(other.id)])
        .await
        .is_err());

    auth_session.set_user_id(employee.id).await?;
    assert!(guard
        .require(&[Permission::OwnerOrStaff(other.id)])
        .await
        .is_ok());
    assert!(guard
        .require(&[Permission::OwnerOrAdmin(other.id)])
        .await
        .is_err());

    Ok(())
}

/// Tests that every listed permission must hold.
///
/// Expected: AccessDenied when one of two permissions fails
#[tokio::test]
async fn requires_all_permissions() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let employee = factory::user::UserFactory::new(db)
        .role("Employee")
        .build()
        .await?;
    AuthSession::new(session).set_user_id(employee.id).await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::Staff, Permission::Admin])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}
