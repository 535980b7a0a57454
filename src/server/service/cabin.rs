use std::collections::HashSet;

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{booking::BookingRepository, cabin::CabinRepository},
    error::AppError,
    model::{
        booking::DateRange,
        cabin::{Cabin, CabinFilter, CabinParams},
    },
    service::availability::AvailabilityPolicy,
};

pub struct CabinService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CabinService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CabinParams) -> Result<Cabin, AppError> {
        validate(&params)?;

        let cabin = CabinRepository::new(self.db).create(params).await?;

        tracing::info!("Created cabin {} ({})", cabin.id, cabin.name);

        Ok(cabin)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Cabin, AppError> {
        CabinRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Cabin {} not found", id)))
    }

    /// Lists cabins matching the search criteria, ordered by name
    pub async fn search(&self, filter: CabinFilter) -> Result<Vec<Cabin>, AppError> {
        Ok(CabinRepository::new(self.db).get_filtered(filter).await?)
    }

    /// Lists cabins with no active booking overlapping the stay
    pub async fn get_available(
        &self,
        range: DateRange,
        policy: &AvailabilityPolicy,
    ) -> Result<Vec<Cabin>, AppError> {
        let booked: HashSet<i32> = BookingRepository::new(self.db)
            .get_overlapping(range)
            .await?
            .into_iter()
            .filter(|booking| policy.participates(&booking.status))
            .map(|booking| booking.cabin_id)
            .collect();

        let cabins = CabinRepository::new(self.db)
            .get_filtered(CabinFilter::default())
            .await?;

        Ok(cabins
            .into_iter()
            .filter(|cabin| !booked.contains(&cabin.id))
            .collect())
    }

    pub async fn update(&self, id: i32, params: CabinParams) -> Result<Cabin, AppError> {
        validate(&params)?;

        CabinRepository::new(self.db)
            .update(id, params)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Cabin {} not found", id)))
    }

    /// Deletes a cabin along with its bookings
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !CabinRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound(format!("Cabin {} not found", id)));
        }

        tracing::info!("Deleted cabin {}", id);

        Ok(())
    }
}

fn validate(params: &CabinParams) -> Result<(), AppError> {
    if params.name.trim().is_empty() {
        return Err(AppError::BadRequest("Cabin name cannot be empty".to_string()));
    }
    if params.capacity < 1 {
        return Err(AppError::BadRequest(
            "Cabin capacity must be at least 1".to_string(),
        ));
    }
    if params.price_per_night < 0 {
        return Err(AppError::BadRequest(
            "Cabin price cannot be negative".to_string(),
        ));
    }

    Ok(())
}
