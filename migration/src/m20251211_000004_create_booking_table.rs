use sea_orm_migration::{prelude::*, schema::*};

use super::{m20251210_000001_create_user_table::User, m20251210_000002_create_cabin_table::Cabin};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Booking::Table)
                    .if_not_exists()
                    .col(pk_auto(Booking::Id))
                    .col(integer(Booking::UserId))
                    .col(integer(Booking::CabinId))
                    .col(date(Booking::CheckIn))
                    .col(date(Booking::CheckOut))
                    .col(string(Booking::Status))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booking_user_id")
                            .from(Booking::Table, Booking::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booking_cabin_id")
                            .from(Booking::Table, Booking::CabinId)
                            .to(Cabin::Table, Cabin::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Availability checks scan one cabin's bookings by date range
        manager
            .create_index(
                Index::create()
                    .name("idx_booking_cabin_dates")
                    .table(Booking::Table)
                    .col(Booking::CabinId)
                    .col(Booking::CheckIn)
                    .col(Booking::CheckOut)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Booking::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Booking {
    Table,
    Id,
    UserId,
    CabinId,
    CheckIn,
    CheckOut,
    Status,
}
