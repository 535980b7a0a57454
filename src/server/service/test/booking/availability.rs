use super::*;

/// Tests that a cabin without bookings is available for any dates.
///
/// Holds even for an inverted range, which is not validated here and has
/// nothing to overlap.
///
/// Expected: Ok(true)
#[tokio::test]
async fn available_without_bookings() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (locks, policy) = (CabinLocks::new(), AvailabilityPolicy::default());

    let cabin = factory::create_cabin(db).await?;

    let service = BookingService::new(db, &locks, &policy);

    assert!(service
        .is_available(cabin.id, date(2024, 1, 1), date(2024, 1, 5), None)
        .await
        .unwrap());
    assert!(service
        .is_available(cabin.id, date(2024, 1, 5), date(2024, 1, 1), None)
        .await
        .unwrap());

    Ok(())
}

/// Tests that a booked interval is unavailable unless its own booking is excluded.
///
/// Expected: Ok(false) without exclusion, Ok(true) when excluded
#[tokio::test]
async fn excludes_given_booking() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (locks, policy) = (CabinLocks::new(), AvailabilityPolicy::default());

    let (_, cabin, booking) = factory::helpers::create_booking_with_dependencies(db).await?;

    let service = BookingService::new(db, &locks, &policy);

    assert!(!service
        .is_available(cabin.id, booking.check_in, booking.check_out, None)
        .await
        .unwrap());
    assert!(service
        .is_available(
            cabin.id,
            booking.check_in,
            booking.check_out,
            Some(booking.id)
        )
        .await
        .unwrap());

    Ok(())
}

/// Tests the half-open boundaries around an existing booking.
///
/// Expected: Ok(true) before and after, Ok(false) when sharing a night
#[tokio::test]
async fn respects_half_open_boundaries() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (locks, policy) = (CabinLocks::new(), AvailabilityPolicy::default());

    // Booked [01-01, 01-05)
    let (_, cabin, _) = factory::helpers::create_booking_with_dependencies(db).await?;

    let service = BookingService::new(db, &locks, &policy);

    assert!(service
        .is_available(cabin.id, date(2023, 12, 28), date(2024, 1, 1), None)
        .await
        .unwrap());
    assert!(service
        .is_available(cabin.id, date(2024, 1, 5), date(2024, 1, 8), None)
        .await
        .unwrap());
    assert!(!service
        .is_available(cabin.id, date(2024, 1, 4), date(2024, 1, 8), None)
        .await
        .unwrap());
    assert!(!service
        .is_available(cabin.id, date(2023, 12, 31), date(2024, 1, 2), None)
        .await
        .unwrap());

    Ok(())
}

/// Tests that unvalidated inverted ranges follow the overlap predicate.
///
/// Expected: Ok(false) when a booking covers the check-in date, Ok(true) otherwise
#[tokio::test]
async fn inverted_range_conflicts_around_check_in() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (locks, policy) = (CabinLocks::new(), AvailabilityPolicy::default());

    let (user, cabin) = factory::helpers::create_booking_dependencies(db).await?;
    BookingFactory::new(db, user.id, cabin.id)
        .check_in(date(2024, 1, 1))
        .check_out(date(2024, 1, 10))
        .build()
        .await?;

    let service = BookingService::new(db, &locks, &policy);

    assert!(!service
        .is_available(cabin.id, date(2024, 1, 5), date(2024, 1, 3), None)
        .await
        .unwrap());
    assert!(service
        .is_available(cabin.id, date(2024, 1, 12), date(2024, 1, 11), None)
        .await
        .unwrap());

    Ok(())
}
