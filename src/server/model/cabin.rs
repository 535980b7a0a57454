//! Cabin domain models and parameters.

use crate::model::cabin::{CabinDto, CabinRequestDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Cabin {
    pub id: i32,
    pub name: String,
    pub short_description: String,
    pub long_description: String,
    /// Maximum number of guests.
    pub capacity: i32,
    /// Nightly price in minor currency units.
    pub price_per_night: i64,
}

impl Cabin {
    pub fn from_entity(entity: entity::cabin::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            short_description: entity.short_description,
            long_description: entity.long_description,
            capacity: entity.capacity,
            price_per_night: entity.price_per_night,
        }
    }

    pub fn into_dto(self) -> CabinDto {
        CabinDto {
            id: self.id,
            name: self.name,
            short_description: self.short_description,
            long_description: self.long_description,
            capacity: self.capacity,
            price_per_night: self.price_per_night,
        }
    }
}

/// Parameters for creating a cabin or replacing its details.
#[derive(Debug, Clone, PartialEq)]
pub struct CabinParams {
    pub name: String,
    pub short_description: String,
    pub long_description: String,
    pub capacity: i32,
    pub price_per_night: i64,
}

impl CabinParams {
    pub fn from_dto(dto: CabinRequestDto) -> Self {
        Self {
            name: dto.name,
            short_description: dto.short_description,
            long_description: dto.long_description,
            capacity: dto.capacity,
            price_per_night: dto.price_per_night,
        }
    }
}

/// Catalog search criteria. Every field is optional and they combine with AND.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CabinFilter {
    /// Case-insensitive substring of the cabin name.
    pub name: Option<String>,
    /// Minimum number of guests the cabin must hold.
    pub min_capacity: Option<i32>,
    /// Highest acceptable nightly price.
    pub max_price: Option<i64>,
}
