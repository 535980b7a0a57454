use crate::server::{
    data::cabin::CabinRepository,
    model::cabin::{CabinFilter, CabinParams},
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{
    builder::TestBuilder,
    factory::{self, cabin::CabinFactory},
};

mod delete;

fn params(name: &str) -> CabinParams {
    CabinParams {
        name: name.to_string(),
        short_description: "Lakeside".to_string(),
        long_description: "Two bedrooms and a sauna".to_string(),
        capacity: 6,
        price_per_night: 15_000,
    }
}

/// Tests creating and reading back a cabin.
///
/// Expected: Ok with stored fields
#[tokio::test]
async fn creates_and_gets_cabin() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Cabin)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CabinRepository::new(db);
    let cabin = repo.create(params("Pine Lodge")).await?;

    let found = repo.get_by_id(cabin.id).await?;

    assert_eq!(found, Some(cabin));

    Ok(())
}
