use crate::server::{data::offering::OfferingRepository, model::offering::OfferingParams};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod find_missing;

/// Tests creating an offering and listing offerings by name.
///
/// Expected: Ok with offerings sorted by name
#[tokio::test]
async fn creates_and_lists_offerings() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Offering)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = OfferingRepository::new(db);
    let sauna = repo
        .create(OfferingParams {
            name: "Sauna".to_string(),
            description: "Wood-fired".to_string(),
            price: 3_000,
        })
        .await?;
    let breakfast = repo
        .create(OfferingParams {
            name: "Breakfast".to_string(),
            description: "Served at nine".to_string(),
            price: 1_500,
        })
        .await?;

    let offerings = repo.get_all().await?;

    assert_eq!(offerings, vec![breakfast, sauna.clone()]);
    assert_eq!(repo.get_by_id(sauna.id).await?, Some(sauna));

    Ok(())
}
