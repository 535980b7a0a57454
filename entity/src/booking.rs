use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "booking")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub cabin_id: i32,
    pub check_in: Date,
    pub check_out: Date,
    pub status: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
    #[sea_orm(
        belongs_to = "super::cabin::Entity",
        from = "Column::CabinId",
        to = "super::cabin::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Cabin,
    #[sea_orm(has_many = "super::booking_offering::Entity")]
    BookingOffering,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::cabin::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Cabin.def()
    }
}

impl Related<super::booking_offering::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BookingOffering.def()
    }
}

impl Related<super::offering::Entity> for Entity {
    fn to() -> RelationDef {
        super::booking_offering::Relation::Offering.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::booking_offering::Relation::Booking.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
