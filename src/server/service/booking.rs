//! Booking lifecycle with conflict prevention.
//!
//! Create and update hold the per-cabin lock of the target cabin and run the
//! availability check and every write inside one database transaction. Two requests
//! for the same cabin are therefore serialized, and a failed request leaves the store
//! untouched.

use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{
        booking::BookingRepository, cabin::CabinRepository, offering::OfferingRepository,
        user::UserRepository,
    },
    error::{booking::BookingError, AppError},
    model::booking::{Booking, BookingFilter, BookingParams, DateRange},
    service::availability::{AvailabilityChecker, AvailabilityPolicy},
    util::cabin_lock::CabinLocks,
};

pub struct BookingService<'a> {
    db: &'a DatabaseConnection,
    locks: &'a CabinLocks,
    policy: &'a AvailabilityPolicy,
}

impl<'a> BookingService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        locks: &'a CabinLocks,
        policy: &'a AvailabilityPolicy,
    ) -> Self {
        Self { db, locks, policy }
    }

    /// Gets a booking by id.
    ///
    /// # Returns
    /// - `Ok(Booking)` - The booking with its service ids
    /// - `Err(AppError::BookingErr(NotFound))` - No booking with that id
    pub async fn get_by_id(&self, id: i32) -> Result<Booking, AppError> {
        BookingRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| BookingError::NotFound(id).into())
    }

    /// Lists bookings ordered by check-in date, optionally filtered by cabin or user.
    pub async fn get_all(&self, filter: BookingFilter) -> Result<Vec<Booking>, AppError> {
        Ok(BookingRepository::new(self.db).get_all(filter).await?)
    }

    /// Whether the cabin is free for the given dates.
    ///
    /// Neither the cabin nor the dates are validated; see
    /// `AvailabilityChecker::is_available`.
    pub async fn is_available(
        &self,
        cabin_id: i32,
        check_in: chrono::NaiveDate,
        check_out: chrono::NaiveDate,
        exclude: Option<i32>,
    ) -> Result<bool, AppError> {
        let available = AvailabilityChecker::new(self.db, self.policy)
            .is_available(cabin_id, check_in, check_out, exclude)
            .await?;

        Ok(available)
    }

    /// Creates a booking if the cabin is free for the requested stay.
    ///
    /// # Returns
    /// - `Ok(Booking)` - The stored booking with its new id
    /// - `Err(BookingError::InvalidDateRange)` - Check-out not after check-in
    /// - `Err(BookingError::Unknown*)` - Referenced user, cabin or service missing
    /// - `Err(BookingError::Conflict)` - Overlaps an active booking; nothing written
    pub async fn create(&self, params: BookingParams) -> Result<Booking, AppError> {
        let range = params.date_range()?;

        let _guard = self.locks.lock(params.cabin_id).await;
        let txn = self.db.begin().await?;

        ensure_references(&txn, &params).await?;

        if let Some(existing) = AvailabilityChecker::new(&txn, self.policy)
            .find_conflict(params.cabin_id, range, None)
            .await?
        {
            txn.rollback().await?;

            tracing::debug!(
                "Rejected booking of cabin {} for {} to {}: overlaps booking {}",
                params.cabin_id,
                range.check_in(),
                range.check_out(),
                existing.id
            );

            return Err(conflict(params.cabin_id, range));
        }

        let booking = BookingRepository::new(&txn).create(params).await?;
        txn.commit().await?;

        tracing::info!(
            "Created booking {} for cabin {} ({} nights from {})",
            booking.id,
            booking.cabin_id,
            range.nights(),
            booking.check_in
        );

        Ok(booking)
    }

    /// Replaces a booking if the target cabin is free for the new stay.
    ///
    /// The booking itself is left out of the check, so keeping or shrinking its own
    /// dates always succeeds.
    ///
    /// # Returns
    /// - `Ok(Booking)` - The updated booking
    /// - `Err(BookingError::NotFound)` - No booking with that id
    /// - `Err(BookingError::Conflict)` - Overlaps another active booking; record unchanged
    pub async fn update(&self, id: i32, params: BookingParams) -> Result<Booking, AppError> {
        let range = params.date_range()?;

        let _guard = self.locks.lock(params.cabin_id).await;
        let txn = self.db.begin().await?;

        let repo = BookingRepository::new(&txn);
        if !repo.exists(id).await? {
            return Err(BookingError::NotFound(id).into());
        }

        ensure_references(&txn, &params).await?;

        if let Some(existing) = AvailabilityChecker::new(&txn, self.policy)
            .find_conflict(params.cabin_id, range, Some(id))
            .await?
        {
            txn.rollback().await?;

            tracing::debug!(
                "Rejected update of booking {}: overlaps booking {} in cabin {}",
                id,
                existing.id,
                params.cabin_id
            );

            return Err(conflict(params.cabin_id, range));
        }

        let booking = repo
            .update(id, params)
            .await?
            .ok_or(BookingError::NotFound(id))?;
        txn.commit().await?;

        tracing::info!(
            "Updated booking {} for cabin {} ({} to {})",
            booking.id,
            booking.cabin_id,
            booking.check_in,
            booking.check_out
        );

        Ok(booking)
    }

    /// Deletes a booking, freeing its dates.
    ///
    /// # Returns
    /// - `Ok(())` - Booking deleted
    /// - `Err(BookingError::NotFound)` - No booking with that id
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;

        if !BookingRepository::new(&txn).delete(id).await? {
            return Err(BookingError::NotFound(id).into());
        }

        txn.commit().await?;

        tracing::info!("Deleted booking {}", id);

        Ok(())
    }
}

/// Checks that the user, cabin and every service referenced by `params` exist.
async fn ensure_references<C: ConnectionTrait>(
    db: &C,
    params: &BookingParams,
) -> Result<(), AppError> {
    if !UserRepository::new(db).exists(params.user_id).await? {
        return Err(BookingError::UnknownUser(params.user_id).into());
    }

    if !CabinRepository::new(db).exists(params.cabin_id).await? {
        return Err(BookingError::UnknownCabin(params.cabin_id).into());
    }

    if let Some(service_id) = OfferingRepository::new(db)
        .find_missing(&params.service_ids)
        .await?
    {
        return Err(BookingError::UnknownService(service_id).into());
    }

    Ok(())
}

fn conflict(cabin_id: i32, range: DateRange) -> AppError {
    BookingError::Conflict {
        cabin_id,
        check_in: range.check_in(),
        check_out: range.check_out(),
    }
    .into()
}
