use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20251210_000003_create_service_table::Service, m20251211_000004_create_booking_table::Booking,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BookingService::Table)
                    .if_not_exists()
                    .col(integer(BookingService::BookingId))
                    .col(integer(BookingService::ServiceId))
                    .primary_key(
                        Index::create()
                            .col(BookingService::BookingId)
                            .col(BookingService::ServiceId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booking_service_booking_id")
                            .from(BookingService::Table, BookingService::BookingId)
                            .to(Booking::Table, Booking::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booking_service_service_id")
                            .from(BookingService::Table, BookingService::ServiceId)
                            .to(Service::Table, Service::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BookingService::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum BookingService {
    Table,
    BookingId,
    ServiceId,
}
