//! Extra service offerings that can be attached to a booking.

use crate::model::offering::{ServiceDto, ServiceRequestDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Offering {
    pub id: i32,
    pub name: String,
    pub description: String,
    /// Price in minor currency units.
    pub price: i64,
}

impl Offering {
    pub fn from_entity(entity: entity::offering::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            price: entity.price,
        }
    }

    pub fn into_dto(self) -> ServiceDto {
        ServiceDto {
            id: self.id,
            name: self.name,
            description: self.description,
            price: self.price,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OfferingParams {
    pub name: String,
    pub description: String,
    pub price: i64,
}

impl OfferingParams {
    pub fn from_dto(dto: ServiceRequestDto) -> Self {
        Self {
            name: dto.name,
            description: dto.description,
            price: dto.price,
        }
    }
}
