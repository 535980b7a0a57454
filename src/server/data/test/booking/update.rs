use super::*;

/// Tests replacing every field of a booking.
///
/// Expected: Ok(Some) with new values and replaced services
#[tokio::test]
async fn replaces_fields_and_services() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, cabin) = factory::helpers::create_booking_dependencies(db).await?;
    let new_cabin = factory::create_cabin(db).await?;
    let sauna = factory::create_offering(db).await?;
    let breakfast = factory::create_offering(db).await?;

    let repo = BookingRepository::new(db);
    let booking = repo.create(params(user.id, cabin.id, vec![sauna.id])).await?;

    let updated = repo
        .update(
            booking.id,
            BookingParams {
                user_id: user.id,
                cabin_id: new_cabin.id,
                check_in: date(2024, 7, 1),
                check_out: date(2024, 7, 2),
                status: "cancelled".to_string(),
                service_ids: vec![breakfast.id],
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.id, booking.id);
    assert_eq!(updated.cabin_id, new_cabin.id);
    assert_eq!(updated.check_in, date(2024, 7, 1));
    assert_eq!(updated.status, "cancelled");
    assert_eq!(updated.service_ids, vec![breakfast.id]);

    let stored = repo.get_by_id(booking.id).await?.unwrap();
    assert_eq!(stored, updated);

    Ok(())
}

/// Tests updating a booking that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_booking() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, cabin) = factory::helpers::create_booking_dependencies(db).await?;

    let repo = BookingRepository::new(db);
    let result = repo.update(9999, params(user.id, cabin.id, vec![])).await?;

    assert!(result.is_none());

    Ok(())
}
