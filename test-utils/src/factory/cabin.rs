//! Cabin factory for creating test cabin entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr};

/// Factory for creating test cabins with customizable fields.
pub struct CabinFactory<'a, C: ConnectionTrait> {
    db: &'a C,
    name: String,
    short_description: String,
    long_description: String,
    capacity: i32,
    price_per_night: i64,
}

impl<'a, C: ConnectionTrait> CabinFactory<'a, C> {
    /// Creates a new CabinFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Cabin {id}"`
    /// - capacity: `4`
    /// - price_per_night: `10_000`
    pub fn new(db: &'a C) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Cabin {}", id),
            short_description: "Test cabin".to_string(),
            long_description: "A cabin created for tests".to_string(),
            capacity: 4,
            price_per_night: 10_000,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn capacity(mut self, capacity: i32) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn price_per_night(mut self, price_per_night: i64) -> Self {
        self.price_per_night = price_per_night;
        self
    }

    /// Builds and inserts the cabin entity into the database.
    pub async fn build(self) -> Result<entity::cabin::Model, DbErr> {
        entity::cabin::ActiveModel {
            name: ActiveValue::Set(self.name),
            short_description: ActiveValue::Set(self.short_description),
            long_description: ActiveValue::Set(self.long_description),
            capacity: ActiveValue::Set(self.capacity),
            price_per_night: ActiveValue::Set(self.price_per_night),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a cabin with default values.
pub async fn create_cabin<C: ConnectionTrait>(db: &C) -> Result<entity::cabin::Model, DbErr> {
    CabinFactory::new(db).build().await
}
