use crate::server::{
    error::{booking::BookingError, AppError},
    model::booking::{BookingFilter, BookingParams},
    service::{availability::AvailabilityPolicy, booking::BookingService},
    util::cabin_lock::CabinLocks,
};
use chrono::NaiveDate;
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{
    builder::TestBuilder,
    factory::{self, booking::BookingFactory, helpers::date},
};

mod availability;
mod create;

fn params(user_id: i32, cabin_id: i32, check_in: NaiveDate, check_out: NaiveDate) -> BookingParams {
    BookingParams {
        user_id,
        cabin_id,
        check_in,
        check_out,
        status: "confirmed".to_string(),
        service_ids: vec![],
    }
}

fn is_conflict(result: &Result<impl std::fmt::Debug, AppError>) -> bool {
    matches!(
        result,
        Err(AppError::BookingErr(BookingError::Conflict { .. }))
    )
}
