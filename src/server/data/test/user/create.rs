use super::*;

/// Tests creating a user and finding them by id.
///
/// Expected: Ok with the stored user and parsed role
#[tokio::test]
async fn creates_and_finds_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(CreateUserParams {
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
            password_hash: "hash".to_string(),
            role: Role::Employee,
        })
        .await?;

    assert_eq!(user.role, Role::Employee);
    assert_eq!(repo.find_by_id(user.id).await?, Some(user));

    Ok(())
}

/// Tests that the unique index rejects a second account with the same email.
///
/// Expected: Err
#[tokio::test]
async fn fails_for_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    UserFactory::new(db).email("dup@example.com").build().await?;

    let repo = UserRepository::new(db);
    let result = repo
        .create(CreateUserParams {
            name: "Dup".to_string(),
            email: "dup@example.com".to_string(),
            password_hash: "hash".to_string(),
            role: Role::Client,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}

/// Tests that the password hash is returned alongside the user on lookup by email.
///
/// Expected: Ok(Some((user, hash)))
#[tokio::test]
async fn finds_password_hash_by_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let entity = UserFactory::new(db)
        .email("bob@example.com")
        .password_hash("stored-hash")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let (user, hash) = repo
        .find_with_password_hash_by_email("bob@example.com")
        .await?
        .unwrap();

    assert_eq!(user.id, entity.id);
    assert_eq!(hash, "stored-hash");
    assert!(repo
        .find_with_password_hash_by_email("nobody@example.com")
        .await?
        .is_none());

    Ok(())
}
