use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Cabin::Table)
                    .if_not_exists()
                    .col(pk_auto(Cabin::Id))
                    .col(string(Cabin::Name))
                    .col(string(Cabin::ShortDescription))
                    .col(text(Cabin::LongDescription))
                    .col(integer(Cabin::Capacity))
                    .col(big_integer(Cabin::PricePerNight))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Cabin::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Cabin {
    Table,
    Id,
    Name,
    ShortDescription,
    LongDescription,
    Capacity,
    PricePerNight,
}
