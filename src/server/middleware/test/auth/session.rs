use super::*;

/// Tests storing, reading and flushing the session user.
///
/// Expected: None before login, Some after, None after flush
#[tokio::test]
async fn stores_and_flushes_user_id() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (_, session) = test.db_and_session().await.unwrap();

    let auth_session = AuthSession::new(session);
    assert_eq!(auth_session.get_user_id().await?, None);

    auth_session.set_user_id(42).await?;
    assert_eq!(auth_session.get_user_id().await?, Some(42));

    auth_session.flush().await?;
    assert_eq!(auth_session.get_user_id().await?, None);

    Ok(())
}
