use super::*;

/// Tests that no id is reported when every offering exists.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_when_all_exist() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Offering)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_offering(db).await?;
    let second = factory::create_offering(db).await?;

    let repo = OfferingRepository::new(db);

    assert_eq!(repo.find_missing(&[first.id, second.id]).await?, None);
    assert_eq!(repo.find_missing(&[]).await?, None);

    Ok(())
}

/// Tests reporting the first unknown id.
///
/// Expected: Ok(Some(id))
#[tokio::test]
async fn returns_first_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Offering)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let offering = factory::create_offering(db).await?;

    let repo = OfferingRepository::new(db);

    assert_eq!(
        repo.find_missing(&[offering.id, 9998, 9999]).await?,
        Some(9998)
    );

    Ok(())
}
