//! Booking domain models and parameters.
//!
//! Provides the booking domain model, the validated stay interval used by availability
//! checks, and parameter types for create, update, and list operations.

use chrono::NaiveDate;

use crate::{
    model::booking::{BookingDto, BookingRequestDto},
    server::error::booking::BookingError,
};

/// Stay interval with check-out strictly after check-in.
///
/// Half-open: the cabin is occupied from the night of `check_in` up to, but not
/// including, the night of `check_out`. A stay ending on a date and another starting on
/// the same date therefore do not overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    check_in: NaiveDate,
    check_out: NaiveDate,
}

impl DateRange {
    /// Validates and builds a stay interval.
    ///
    /// # Returns
    /// - `Ok(DateRange)` - `check_out` is after `check_in`
    /// - `Err(BookingError::InvalidDateRange)` - Zero-length or inverted stay
    pub fn new(check_in: NaiveDate, check_out: NaiveDate) -> Result<Self, BookingError> {
        if check_out <= check_in {
            return Err(BookingError::InvalidDateRange {
                check_in,
                check_out,
            });
        }

        Ok(Self {
            check_in,
            check_out,
        })
    }

    pub fn check_in(&self) -> NaiveDate {
        self.check_in
    }

    pub fn check_out(&self) -> NaiveDate {
        self.check_out
    }

    /// Number of nights covered by the stay.
    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).num_days()
    }
}

/// Booking with its attached service ids.
#[derive(Debug, Clone, PartialEq)]
pub struct Booking {
    pub id: i32,
    pub user_id: i32,
    pub cabin_id: i32,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub status: String,
    /// Ids of the extra services attached to the booking, ascending.
    pub service_ids: Vec<i32>,
}

impl Booking {
    /// Converts a booking entity and its service links at the repository boundary.
    pub fn from_entity(entity: entity::booking::Model, mut service_ids: Vec<i32>) -> Self {
        service_ids.sort_unstable();

        Self {
            id: entity.id,
            user_id: entity.user_id,
            cabin_id: entity.cabin_id,
            check_in: entity.check_in,
            check_out: entity.check_out,
            status: entity.status,
            service_ids,
        }
    }

    pub fn into_dto(self) -> BookingDto {
        BookingDto {
            id: self.id,
            user_id: self.user_id,
            cabin_id: self.cabin_id,
            check_in: self.check_in,
            check_out: self.check_out,
            status: self.status,
            service_ids: self.service_ids,
        }
    }
}

/// Parameters for creating a booking or fully replacing an existing one.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingParams {
    pub user_id: i32,
    pub cabin_id: i32,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub status: String,
    pub service_ids: Vec<i32>,
}

impl BookingParams {
    /// Converts a request DTO, dropping duplicate service ids.
    pub fn from_dto(dto: BookingRequestDto) -> Self {
        let mut service_ids = dto.service_ids;
        service_ids.sort_unstable();
        service_ids.dedup();

        Self {
            user_id: dto.user_id,
            cabin_id: dto.cabin_id,
            check_in: dto.check_in,
            check_out: dto.check_out,
            status: dto.status,
            service_ids,
        }
    }

    /// Validates the stay interval of these parameters.
    pub fn date_range(&self) -> Result<DateRange, BookingError> {
        DateRange::new(self.check_in, self.check_out)
    }
}

/// Optional filters for listing bookings. Empty filter lists every booking.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BookingFilter {
    pub cabin_id: Option<i32>,
    pub user_id: Option<i32>,
}
