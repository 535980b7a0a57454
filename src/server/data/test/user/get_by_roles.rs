use super::*;

/// Tests listing users by role.
///
/// Expected: Ok with clients only, then staff only
#[tokio::test]
async fn lists_users_with_given_roles() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let client = factory::create_user(db).await?;
    let employee = UserFactory::new(db).role("Employee").build().await?;
    let admin = UserFactory::new(db).role("Administrator").build().await?;

    let repo = UserRepository::new(db);

    let clients = repo.get_by_roles(&[Role::Client]).await?;
    assert_eq!(clients.len(), 1);
    assert_eq!(clients[0].id, client.id);

    let staff = repo
        .get_by_roles(&[Role::Employee, Role::Administrator])
        .await?;
    let mut staff_ids: Vec<i32> = staff.iter().map(|u| u.id).collect();
    staff_ids.sort_unstable();
    assert_eq!(staff_ids, vec![employee.id, admin.id]);

    Ok(())
}
