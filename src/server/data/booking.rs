//! Booking data repository for database operations.
//!
//! Bookings are stored in the `booking` table with their extra services in the
//! `booking_service` join table. The repository keeps both in step: every write replaces
//! the service links of the booking it touches, and reads return the booking together
//! with its service ids.

use std::collections::HashMap;

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::booking::{Booking, BookingFilter, BookingParams, DateRange};

/// Repository providing database operations for bookings and their service links.
pub struct BookingRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BookingRepository<'a, C> {
    /// Creates a new BookingRepository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection or open transaction
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a booking and links its services.
    ///
    /// Performs no availability or reference checks; callers are expected to have
    /// validated the parameters inside the same transaction.
    ///
    /// # Returns
    /// - `Ok(Booking)` - The stored booking with its generated id
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, params: BookingParams) -> Result<Booking, DbErr> {
        let entity = entity::booking::ActiveModel {
            user_id: ActiveValue::Set(params.user_id),
            cabin_id: ActiveValue::Set(params.cabin_id),
            check_in: ActiveValue::Set(params.check_in),
            check_out: ActiveValue::Set(params.check_out),
            status: ActiveValue::Set(params.status),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        self.insert_service_links(entity.id, &params.service_ids)
            .await?;

        Ok(Booking::from_entity(entity, params.service_ids))
    }

    /// Gets a booking by id with its service ids.
    ///
    /// # Returns
    /// - `Ok(Some(Booking))` - Booking found
    /// - `Ok(None)` - No booking with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Booking>, DbErr> {
        let Some(entity) = entity::prelude::Booking::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let service_ids = self.get_service_ids(id).await?;

        Ok(Some(Booking::from_entity(entity, service_ids)))
    }

    /// Lists bookings matching the filter, ordered by check-in date then id.
    ///
    /// Service links for all returned bookings are fetched with a single query.
    pub async fn get_all(&self, filter: BookingFilter) -> Result<Vec<Booking>, DbErr> {
        let mut query = entity::prelude::Booking::find();

        if let Some(cabin_id) = filter.cabin_id {
            query = query.filter(entity::booking::Column::CabinId.eq(cabin_id));
        }
        if let Some(user_id) = filter.user_id {
            query = query.filter(entity::booking::Column::UserId.eq(user_id));
        }

        let entities = query
            .order_by_asc(entity::booking::Column::CheckIn)
            .order_by_asc(entity::booking::Column::Id)
            .all(self.db)
            .await?;

        if entities.is_empty() {
            return Ok(Vec::new());
        }

        let booking_ids: Vec<i32> = entities.iter().map(|b| b.id).collect();
        let links = entity::prelude::BookingOffering::find()
            .filter(entity::booking_offering::Column::BookingId.is_in(booking_ids))
            .all(self.db)
            .await?;

        let mut services_by_booking: HashMap<i32, Vec<i32>> = HashMap::new();
        for link in links {
            services_by_booking
                .entry(link.booking_id)
                .or_default()
                .push(link.offering_id);
        }

        Ok(entities
            .into_iter()
            .map(|entity| {
                let service_ids = services_by_booking.remove(&entity.id).unwrap_or_default();
                Booking::from_entity(entity, service_ids)
            })
            .collect())
    }

    /// Gets every booking of a cabin, optionally leaving one booking out.
    ///
    /// Used by availability checks, which must ignore the booking being updated.
    ///
    /// # Arguments
    /// - `cabin_id` - Cabin whose bookings to fetch
    /// - `exclude` - Booking id to leave out of the result
    pub async fn get_by_cabin(
        &self,
        cabin_id: i32,
        exclude: Option<i32>,
    ) -> Result<Vec<entity::booking::Model>, DbErr> {
        let mut query = entity::prelude::Booking::find()
            .filter(entity::booking::Column::CabinId.eq(cabin_id));

        if let Some(booking_id) = exclude {
            query = query.filter(entity::booking::Column::Id.ne(booking_id));
        }

        query
            .order_by_asc(entity::booking::Column::CheckIn)
            .all(self.db)
            .await
    }

    /// Gets bookings of any cabin whose stay overlaps the given interval.
    ///
    /// Uses the half-open overlap rule, so a booking ending on `range.check_in()` is
    /// not returned.
    pub async fn get_overlapping(
        &self,
        range: DateRange,
    ) -> Result<Vec<entity::booking::Model>, DbErr> {
        entity::prelude::Booking::find()
            .filter(entity::booking::Column::CheckIn.lt(range.check_out()))
            .filter(entity::booking::Column::CheckOut.gt(range.check_in()))
            .all(self.db)
            .await
    }

    /// Replaces every field and the service links of an existing booking.
    ///
    /// # Returns
    /// - `Ok(Some(Booking))` - The updated booking
    /// - `Ok(None)` - No booking with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(&self, id: i32, params: BookingParams) -> Result<Option<Booking>, DbErr> {
        let Some(existing) = entity::prelude::Booking::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::booking::ActiveModel = existing.into();
        active_model.user_id = ActiveValue::Set(params.user_id);
        active_model.cabin_id = ActiveValue::Set(params.cabin_id);
        active_model.check_in = ActiveValue::Set(params.check_in);
        active_model.check_out = ActiveValue::Set(params.check_out);
        active_model.status = ActiveValue::Set(params.status);

        let entity = active_model.update(self.db).await?;

        self.delete_service_links(id).await?;
        self.insert_service_links(id, &params.service_ids).await?;

        Ok(Some(Booking::from_entity(entity, params.service_ids)))
    }

    /// Deletes a booking and its service links.
    ///
    /// # Returns
    /// - `Ok(true)` - Booking deleted
    /// - `Ok(false)` - No booking with that id
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        self.delete_service_links(id).await?;

        let result = entity::prelude::Booking::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Booking::find_by_id(id)
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    async fn get_service_ids(&self, booking_id: i32) -> Result<Vec<i32>, DbErr> {
        let links = entity::prelude::BookingOffering::find()
            .filter(entity::booking_offering::Column::BookingId.eq(booking_id))
            .all(self.db)
            .await?;

        Ok(links.into_iter().map(|link| link.offering_id).collect())
    }

    async fn insert_service_links(&self, booking_id: i32, service_ids: &[i32]) -> Result<(), DbErr> {
        for &offering_id in service_ids {
            entity::booking_offering::ActiveModel {
                booking_id: ActiveValue::Set(booking_id),
                offering_id: ActiveValue::Set(offering_id),
            }
            .insert(self.db)
            .await?;
        }

        Ok(())
    }

    async fn delete_service_links(&self, booking_id: i32) -> Result<(), DbErr> {
        entity::prelude::BookingOffering::delete_many()
            .filter(entity::booking_offering::Column::BookingId.eq(booking_id))
            .exec(self.db)
            .await?;

        Ok(())
    }
}
