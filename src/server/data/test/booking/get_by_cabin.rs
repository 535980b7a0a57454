use super::*;

/// Tests fetching only the bookings of one cabin.
///
/// Expected: Ok with bookings of the requested cabin only
#[tokio::test]
async fn returns_only_bookings_of_cabin() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, cabin, booking) = factory::helpers::create_booking_with_dependencies(db).await?;
    let other_cabin = factory::create_cabin(db).await?;
    factory::create_booking(db, user.id, other_cabin.id).await?;

    let repo = BookingRepository::new(db);
    let bookings = repo.get_by_cabin(cabin.id, None).await?;

    assert_eq!(bookings.len(), 1);
    assert_eq!(bookings[0].id, booking.id);

    Ok(())
}

/// Tests leaving out the excluded booking.
///
/// Expected: Ok with the excluded booking missing
#[tokio::test]
async fn leaves_out_excluded_booking() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, cabin, booking) = factory::helpers::create_booking_with_dependencies(db).await?;
    let second = BookingFactory::new(db, user.id, cabin.id)
        .check_in(date(2024, 2, 1))
        .check_out(date(2024, 2, 3))
        .build()
        .await?;

    let repo = BookingRepository::new(db);
    let bookings = repo.get_by_cabin(cabin.id, Some(booking.id)).await?;

    assert_eq!(bookings.len(), 1);
    assert_eq!(bookings[0].id, second.id);

    Ok(())
}
