//! Service offering data repository.

use std::collections::HashSet;

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::offering::{Offering, OfferingParams};

pub struct OfferingRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> OfferingRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: OfferingParams) -> Result<Offering, DbErr> {
        let entity = entity::offering::ActiveModel {
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description),
            price: ActiveValue::Set(params.price),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Offering::from_entity(entity))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Offering>, DbErr> {
        let entity = entity::prelude::Offering::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Offering::from_entity))
    }

    /// Lists all offerings ordered by name.
    pub async fn get_all(&self) -> Result<Vec<Offering>, DbErr> {
        let entities = entity::prelude::Offering::find()
            .order_by_asc(entity::offering::Column::Name)
            .order_by_asc(entity::offering::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Offering::from_entity).collect())
    }

    /// Returns the first id in `ids` that has no matching offering.
    ///
    /// # Returns
    /// - `Ok(None)` - Every id exists (or `ids` is empty)
    /// - `Ok(Some(id))` - The first unknown id, in the order given
    pub async fn find_missing(&self, ids: &[i32]) -> Result<Option<i32>, DbErr> {
        if ids.is_empty() {
            return Ok(None);
        }

        let found: HashSet<i32> = entity::prelude::Offering::find()
            .filter(entity::offering::Column::Id.is_in(ids.to_vec()))
            .all(self.db)
            .await?
            .into_iter()
            .map(|offering| offering.id)
            .collect();

        Ok(ids.iter().copied().find(|id| !found.contains(id)))
    }
}
