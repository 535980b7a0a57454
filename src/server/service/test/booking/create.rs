use super::*;

/// Tests that stays touching at the check-out date are both accepted.
///
/// Expected: Ok for `[01-01, 01-05)` and `[01-05, 01-10)`
#[tokio::test]
async fn accepts_adjacent_stays() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (locks, policy) = (CabinLocks::new(), AvailabilityPolicy::default());

    let (user, cabin) = factory::helpers::create_booking_dependencies(db).await?;

    let service = BookingService::new(db, &locks, &policy);
    let first = service
        .create(params(user.id, cabin.id, date(2024, 1, 1), date(2024, 1, 5)))
        .await;
    let second = service
        .create(params(user.id, cabin.id, date(2024, 1, 5), date(2024, 1, 10)))
        .await;

    assert!(first.is_ok());
    assert!(second.is_ok());
    assert_ne!(first.unwrap().id, second.unwrap().id);

    Ok(())
}

/// Tests rejecting a stay inside an existing booking.
///
/// Expected: Err(Conflict) and no second row written
#[tokio::test]
async fn rejects_overlapping_stay() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (locks, policy) = (CabinLocks::new(), AvailabilityPolicy::default());

    let (user, cabin) = factory::helpers::create_booking_dependencies(db).await?;

    let service = BookingService::new(db, &locks, &policy);
    service
        .create(params(user.id, cabin.id, date(2024, 1, 1), date(2024, 1, 10)))
        .await
        .unwrap();

    let result = service
        .create(params(user.id, cabin.id, date(2024, 1, 5), date(2024, 1, 8)))
        .await;

    assert!(is_conflict(&result));
    assert_eq!(entity::prelude::Booking::find().count(db).await?, 1);

    Ok(())
}

/// Tests that a booking of another cabin never conflicts.
///
/// Expected: Ok for identical dates in two cabins
#[tokio::test]
async fn ignores_bookings_of_other_cabins() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (locks, policy) = (CabinLocks::new(), AvailabilityPolicy::default());

    let (user, cabin, _) = factory::helpers::create_booking_with_dependencies(db).await?;
    let other_cabin = factory::create_cabin(db).await?;

    let service = BookingService::new(db, &locks, &policy);
    let result = service
        .create(params(user.id, other_cabin.id, date(2024, 1, 1), date(2024, 1, 5)))
        .await;

    assert!(result.is_ok());
    assert_ne!(result.unwrap().cabin_id, cabin.id);

    Ok(())
}

/// Tests that zero-length and inverted stays are rejected before any write.
///
/// Expected: Err(InvalidDateRange)
#[tokio::test]
async fn rejects_invalid_date_range() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (locks, policy) = (CabinLocks::new(), AvailabilityPolicy::default());

    let (user, cabin) = factory::helpers::create_booking_dependencies(db).await?;

    let service = BookingService::new(db, &locks, &policy);
    let zero_length = service
        .create(params(user.id, cabin.id, date(2024, 1, 5), date(2024, 1, 5)))
        .await;
    let inverted = service
        .create(params(user.id, cabin.id, date(2024, 1, 5), date(2024, 1, 1)))
        .await;

    assert!(matches!(
        zero_length,
        Err(AppError::BookingErr(BookingError::InvalidDateRange { .. }))
    ));
    assert!(matches!(
        inverted,
        Err(AppError::BookingErr(BookingError::InvalidDateRange { .. }))
    ));
    assert_eq!(entity::prelude::Booking::find().count(db).await?, 0);

    Ok(())
}

/// Tests rejecting unknown user, cabin and service references.
///
/// Expected: Err(UnknownUser), Err(UnknownCabin), Err(UnknownService)
#[tokio::test]
async fn rejects_unknown_references() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (locks, policy) = (CabinLocks::new(), AvailabilityPolicy::default());

    let (user, cabin) = factory::helpers::create_booking_dependencies(db).await?;

    let service = BookingService::new(db, &locks, &policy);

    let unknown_user = service
        .create(params(9999, cabin.id, date(2024, 1, 1), date(2024, 1, 5)))
        .await;
    assert!(matches!(
        unknown_user,
        Err(AppError::BookingErr(BookingError::UnknownUser(9999)))
    ));

    let unknown_cabin = service
        .create(params(user.id, 9999, date(2024, 1, 1), date(2024, 1, 5)))
        .await;
    assert!(matches!(
        unknown_cabin,
        Err(AppError::BookingErr(BookingError::UnknownCabin(9999)))
    ));

    let mut with_service = params(user.id, cabin.id, date(2024, 1, 1), date(2024, 1, 5));
    with_service.service_ids = vec![9999];
    let unknown_service = service.create(with_service).await;
    assert!(matches!(
        unknown_service,
        Err(AppError::BookingErr(BookingError::UnknownService(9999)))
    ));

    assert_eq!(entity::prelude::Booking::find().count(db).await?, 0);

    Ok(())
}

/// Tests that the status label is stored verbatim with the attached services.
///
/// Expected: Ok with status and service ids as given
#[tokio::test]
async fn stores_status_and_services() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (locks, policy) = (CabinLocks::new(), AvailabilityPolicy::default());

    let (user, cabin) = factory::helpers::create_booking_dependencies(db).await?;
    let sauna = factory::create_offering(db).await?;

    let service = BookingService::new(db, &locks, &policy);
    let mut request = params(user.id, cabin.id, date(2024, 1, 1), date(2024, 1, 5));
    request.status = "Awaiting Payment".to_string();
    request.service_ids = vec![sauna.id];

    let booking = service.create(request).await.unwrap();
    let stored = service.get_by_id(booking.id).await.unwrap();

    assert_eq!(stored.status, "Awaiting Payment");
    assert_eq!(stored.service_ids, vec![sauna.id]);

    Ok(())
}

/// Tests that bookings with an inactive status do not block the cabin.
///
/// Expected: Ok over a cancelled booking, Err(Conflict) without the policy
#[tokio::test]
async fn skips_inactive_statuses() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = CabinLocks::new();

    let (user, cabin) = factory::helpers::create_booking_dependencies(db).await?;
    BookingFactory::new(db, user.id, cabin.id)
        .status("Cancelled")
        .build()
        .await?;

    let strict = AvailabilityPolicy::default();
    let result = BookingService::new(db, &locks, &strict)
        .create(params(user.id, cabin.id, date(2024, 1, 2), date(2024, 1, 3)))
        .await;
    assert!(is_conflict(&result));

    let lenient = AvailabilityPolicy::new(["cancelled"]);
    let result = BookingService::new(db, &locks, &lenient)
        .create(params(user.id, cabin.id, date(2024, 1, 2), date(2024, 1, 3)))
        .await;
    assert!(result.is_ok());

    Ok(())
}
