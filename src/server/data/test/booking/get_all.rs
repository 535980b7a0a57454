use super::*;

/// Tests listing bookings ordered by check-in date.
///
/// Expected: Ok with bookings sorted ascending by check-in
#[tokio::test]
async fn returns_bookings_ordered_by_check_in() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, cabin) = factory::helpers::create_booking_dependencies(db).await?;
    let later = BookingFactory::new(db, user.id, cabin.id)
        .check_in(date(2024, 3, 10))
        .check_out(date(2024, 3, 12))
        .build()
        .await?;
    let earlier = BookingFactory::new(db, user.id, cabin.id)
        .check_in(date(2024, 2, 1))
        .check_out(date(2024, 2, 3))
        .build()
        .await?;

    let repo = BookingRepository::new(db);
    let bookings = repo.get_all(BookingFilter::default()).await?;

    let ids: Vec<i32> = bookings.iter().map(|b| b.id).collect();
    assert_eq!(ids, vec![earlier.id, later.id]);

    Ok(())
}

/// Tests filtering bookings by cabin and by user.
///
/// Expected: Ok with only matching bookings
#[tokio::test]
async fn filters_by_cabin_and_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, cabin) = factory::helpers::create_booking_dependencies(db).await?;
    let (other_user, other_cabin) = factory::helpers::create_booking_dependencies(db).await?;
    let mine = factory::create_booking(db, user.id, cabin.id).await?;
    let theirs = factory::create_booking(db, other_user.id, other_cabin.id).await?;

    let repo = BookingRepository::new(db);

    let by_cabin = repo
        .get_all(BookingFilter {
            cabin_id: Some(other_cabin.id),
            user_id: None,
        })
        .await?;
    assert_eq!(by_cabin.len(), 1);
    assert_eq!(by_cabin[0].id, theirs.id);

    let by_user = repo
        .get_all(BookingFilter {
            cabin_id: None,
            user_id: Some(user.id),
        })
        .await?;
    assert_eq!(by_user.len(), 1);
    assert_eq!(by_user[0].id, mine.id);

    Ok(())
}

/// Tests that each listed booking carries its own service ids.
///
/// Expected: Ok with services grouped per booking
#[tokio::test]
async fn attaches_service_ids_per_booking() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, cabin) = factory::helpers::create_booking_dependencies(db).await?;
    let other_cabin = factory::create_cabin(db).await?;
    let sauna = factory::create_offering(db).await?;

    let repo = BookingRepository::new(db);
    let with_sauna = repo.create(params(user.id, cabin.id, vec![sauna.id])).await?;
    let without = repo.create(params(user.id, other_cabin.id, vec![])).await?;

    let bookings = repo.get_all(BookingFilter::default()).await?;

    let found_with = bookings.iter().find(|b| b.id == with_sauna.id).unwrap();
    let found_without = bookings.iter().find(|b| b.id == without.id).unwrap();
    assert_eq!(found_with.service_ids, vec![sauna.id]);
    assert!(found_without.service_ids.is_empty());

    Ok(())
}
