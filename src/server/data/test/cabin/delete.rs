use super::*;

/// Tests that deleting a cabin removes its bookings through the cascade.
///
/// Expected: Ok(true) and no bookings left for the cabin
#[tokio::test]
async fn deletes_cabin_and_its_bookings() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, cabin, booking) = factory::helpers::create_booking_with_dependencies(db).await?;

    let repo = CabinRepository::new(db);
    let deleted = repo.delete(cabin.id).await?;

    assert!(deleted);
    assert!(!repo.exists(cabin.id).await?);
    assert!(entity::prelude::Booking::find_by_id(booking.id)
        .one(db)
        .await?
        .is_none());

    Ok(())
}

/// Tests deleting a cabin that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_cabin() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Cabin)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CabinRepository::new(db);

    assert!(!repo.delete(9999).await?);

    Ok(())
}
