//! Booking factory for creating test booking entities.
//!
//! Inserts rows directly, bypassing the availability check. Use it to arrange
//! existing store state; go through the booking service to exercise the check.

use crate::factory::helpers::date;
use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr};

/// Factory for creating test bookings with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::{booking::BookingFactory, helpers::date};
///
/// let booking = BookingFactory::new(&db, user.id, cabin.id)
///     .check_in(date(2024, 3, 1))
///     .check_out(date(2024, 3, 5))
///     .status("cancelled")
///     .build()
///     .await?;
/// ```
pub struct BookingFactory<'a, C: ConnectionTrait> {
    db: &'a C,
    user_id: i32,
    cabin_id: i32,
    check_in: NaiveDate,
    check_out: NaiveDate,
    status: String,
}

impl<'a, C: ConnectionTrait> BookingFactory<'a, C> {
    /// Creates a new BookingFactory with default values.
    ///
    /// Defaults:
    /// - check_in: `2024-01-01`
    /// - check_out: `2024-01-05`
    /// - status: `"confirmed"`
    pub fn new(db: &'a C, user_id: i32, cabin_id: i32) -> Self {
        Self {
            db,
            user_id,
            cabin_id,
            check_in: date(2024, 1, 1),
            check_out: date(2024, 1, 5),
            status: "confirmed".to_string(),
        }
    }

    pub fn check_in(mut self, check_in: NaiveDate) -> Self {
        self.check_in = check_in;
        self
    }

    pub fn check_out(mut self, check_out: NaiveDate) -> Self {
        self.check_out = check_out;
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Builds and inserts the booking entity into the database.
    pub async fn build(self) -> Result<entity::booking::Model, DbErr> {
        entity::booking::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            cabin_id: ActiveValue::Set(self.cabin_id),
            check_in: ActiveValue::Set(self.check_in),
            check_out: ActiveValue::Set(self.check_out),
            status: ActiveValue::Set(self.status),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a `[2024-01-01, 2024-01-05)` confirmed booking.
pub async fn create_booking<C: ConnectionTrait>(
    db: &C,
    user_id: i32,
    cabin_id: i32,
) -> Result<entity::booking::Model, DbErr> {
    BookingFactory::new(db, user_id, cabin_id).build().await
}
