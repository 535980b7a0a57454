use sea_orm::entity::prelude::*;

/// An extra service that can be attached to a booking.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "service")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    /// Price in minor currency units.
    pub price: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::booking_offering::Entity")]
    BookingOffering,
}

impl Related<super::booking_offering::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BookingOffering.def()
    }
}

impl Related<super::booking::Entity> for Entity {
    fn to() -> RelationDef {
        super::booking_offering::Relation::Booking.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::booking_offering::Relation::Offering.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
