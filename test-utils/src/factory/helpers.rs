//! Shared helper utilities for factory methods.

use chrono::NaiveDate;
use sea_orm::{ConnectionTrait, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// Used to keep generated names and emails unique across factories.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Builds a calendar date, panicking on an invalid one.
///
/// Test-only shorthand for `NaiveDate::from_ymd_opt(..).unwrap()`.
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("invalid test date")
}

/// Creates the user and cabin a booking needs.
///
/// # Returns
/// - `Ok((user, cabin))` - The created owner and cabin
/// - `Err(DbErr)` - Database error during creation
pub async fn create_booking_dependencies<C: ConnectionTrait>(
    db: &C,
) -> Result<(entity::user::Model, entity::cabin::Model), DbErr> {
    let user = crate::factory::user::create_user(db).await?;
    let cabin = crate::factory::cabin::create_cabin(db).await?;

    Ok((user, cabin))
}

/// Creates a booking together with its owning user and cabin.
///
/// The booking covers `[2024-01-01, 2024-01-05)` with status `"confirmed"`.
pub async fn create_booking_with_dependencies<C: ConnectionTrait>(
    db: &C,
) -> Result<
    (
        entity::user::Model,
        entity::cabin::Model,
        entity::booking::Model,
    ),
    DbErr,
> {
    let (user, cabin) = create_booking_dependencies(db).await?;
    let booking = crate::factory::booking::create_booking(db, user.id, cabin.id).await?;

    Ok((user, cabin, booking))
}
