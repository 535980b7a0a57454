use super::*;

/// Tests deleting a booking together with its service links.
///
/// Expected: Ok(true) and no rows left behind
#[tokio::test]
async fn deletes_booking_and_links() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, cabin) = factory::helpers::create_booking_dependencies(db).await?;
    let sauna = factory::create_offering(db).await?;

    let repo = BookingRepository::new(db);
    let booking = repo.create(params(user.id, cabin.id, vec![sauna.id])).await?;

    let deleted = repo.delete(booking.id).await?;

    assert!(deleted);
    assert!(!repo.exists(booking.id).await?);
    assert_eq!(entity::prelude::BookingOffering::find().count(db).await?, 0);

    Ok(())
}

/// Tests deleting a booking that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_booking() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BookingRepository::new(db);

    assert!(!repo.delete(9999).await?);

    Ok(())
}
