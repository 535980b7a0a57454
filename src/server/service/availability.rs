//! Booking overlap detection.
//!
//! Stays are half-open `[check_in, check_out)` intervals: a guest checking out on a
//! date and another checking in on the same date never conflict. Bookings whose status
//! the `AvailabilityPolicy` marks inactive are ignored entirely.

use std::collections::HashSet;

use chrono::NaiveDate;
use sea_orm::{ConnectionTrait, DbErr};

use crate::server::{data::booking::BookingRepository, model::booking::DateRange};

/// Whether two half-open stays share at least one night.
pub fn overlaps(
    a_check_in: NaiveDate,
    a_check_out: NaiveDate,
    b_check_in: NaiveDate,
    b_check_out: NaiveDate,
) -> bool {
    a_check_in < b_check_out && b_check_in < a_check_out
}

/// Decides which booking statuses block a cabin.
///
/// With no inactive statuses configured every booking blocks its dates.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AvailabilityPolicy {
    inactive_statuses: HashSet<String>,
}

impl AvailabilityPolicy {
    /// Builds a policy ignoring the given statuses, compared case-insensitively.
    pub fn new<I, S>(inactive_statuses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            inactive_statuses: inactive_statuses
                .into_iter()
                .map(|status| status.as_ref().trim().to_lowercase())
                .filter(|status| !status.is_empty())
                .collect(),
        }
    }

    /// Whether a booking with this status takes part in overlap checks.
    pub fn participates(&self, status: &str) -> bool {
        !self.inactive_statuses.contains(&status.to_lowercase())
    }
}

/// Runs overlap checks against the bookings visible through `db`.
///
/// Pass the open transaction when checking before a write so the check and the write
/// see the same data.
pub struct AvailabilityChecker<'a, C: ConnectionTrait> {
    db: &'a C,
    policy: &'a AvailabilityPolicy,
}

impl<'a, C: ConnectionTrait> AvailabilityChecker<'a, C> {
    pub fn new(db: &'a C, policy: &'a AvailabilityPolicy) -> Self {
        Self { db, policy }
    }

    /// Finds the earliest active booking of the cabin overlapping the range.
    ///
    /// # Arguments
    /// - `cabin_id` - Cabin to check
    /// - `range` - Requested stay
    /// - `exclude` - Booking to ignore, used when a booking is moved
    ///
    /// # Returns
    /// - `Ok(None)` - The cabin is free for the whole range
    /// - `Ok(Some(booking))` - A conflicting booking
    /// - `Err(DbErr)` - Database error while loading bookings
    pub async fn find_conflict(
        &self,
        cabin_id: i32,
        range: DateRange,
        exclude: Option<i32>,
    ) -> Result<Option<entity::booking::Model>, DbErr> {
        self.first_overlapping(cabin_id, range.check_in(), range.check_out(), exclude)
            .await
    }

    /// Whether the cabin has no active booking overlapping the given dates.
    ///
    /// The dates are not validated here and go through the same predicate as
    /// `find_conflict`. A cabin without bookings is always available. A zero-length
    /// or inverted range still conflicts with a booking that contains its check-in
    /// date; writes reject such ranges before checking.
    pub async fn is_available(
        &self,
        cabin_id: i32,
        check_in: NaiveDate,
        check_out: NaiveDate,
        exclude: Option<i32>,
    ) -> Result<bool, DbErr> {
        let conflict = self
            .first_overlapping(cabin_id, check_in, check_out, exclude)
            .await?;

        Ok(conflict.is_none())
    }

    async fn first_overlapping(
        &self,
        cabin_id: i32,
        check_in: NaiveDate,
        check_out: NaiveDate,
        exclude: Option<i32>,
    ) -> Result<Option<entity::booking::Model>, DbErr> {
        let bookings = BookingRepository::new(self.db)
            .get_by_cabin(cabin_id, exclude)
            .await?;

        Ok(bookings.into_iter().find(|booking| {
            self.policy.participates(&booking.status)
                && overlaps(check_in, check_out, booking.check_in, booking.check_out)
        }))
    }
}
