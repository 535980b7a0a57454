//! Cabin data repository for database operations.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::cabin::{Cabin, CabinFilter, CabinParams};

pub struct CabinRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CabinRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CabinParams) -> Result<Cabin, DbErr> {
        let entity = entity::cabin::ActiveModel {
            name: ActiveValue::Set(params.name),
            short_description: ActiveValue::Set(params.short_description),
            long_description: ActiveValue::Set(params.long_description),
            capacity: ActiveValue::Set(params.capacity),
            price_per_night: ActiveValue::Set(params.price_per_night),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Cabin::from_entity(entity))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Cabin>, DbErr> {
        let entity = entity::prelude::Cabin::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Cabin::from_entity))
    }

    /// Lists cabins matching every given criterion, ordered by name.
    ///
    /// The name match is a substring match; SQLite's `LIKE` ignores ASCII case.
    pub async fn get_filtered(&self, filter: CabinFilter) -> Result<Vec<Cabin>, DbErr> {
        let mut query = entity::prelude::Cabin::find();

        if let Some(name) = filter.name.as_deref() {
            query = query.filter(entity::cabin::Column::Name.contains(name));
        }
        if let Some(min_capacity) = filter.min_capacity {
            query = query.filter(entity::cabin::Column::Capacity.gte(min_capacity));
        }
        if let Some(max_price) = filter.max_price {
            query = query.filter(entity::cabin::Column::PricePerNight.lte(max_price));
        }

        let entities = query
            .order_by_asc(entity::cabin::Column::Name)
            .order_by_asc(entity::cabin::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Cabin::from_entity).collect())
    }

    /// Replaces the details of a cabin.
    ///
    /// # Returns
    /// - `Ok(Some(Cabin))` - The updated cabin
    /// - `Ok(None)` - No cabin with that id
    pub async fn update(&self, id: i32, params: CabinParams) -> Result<Option<Cabin>, DbErr> {
        let Some(existing) = entity::prelude::Cabin::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active_model: entity::cabin::ActiveModel = existing.into();
        active_model.name = ActiveValue::Set(params.name);
        active_model.short_description = ActiveValue::Set(params.short_description);
        active_model.long_description = ActiveValue::Set(params.long_description);
        active_model.capacity = ActiveValue::Set(params.capacity);
        active_model.price_per_night = ActiveValue::Set(params.price_per_night);

        let entity = active_model.update(self.db).await?;

        Ok(Some(Cabin::from_entity(entity)))
    }

    /// Deletes a cabin. Its bookings are removed by the foreign key cascade.
    ///
    /// # Returns
    /// - `Ok(true)` - Cabin deleted
    /// - `Ok(false)` - No cabin with that id
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Cabin::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Cabin::find_by_id(id).count(self.db).await?;

        Ok(count > 0)
    }
}
