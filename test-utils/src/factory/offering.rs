//! Service offering factory.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr};

/// Creates a service offering named `"Service {id}"` priced at 2 500 minor units.
pub async fn create_offering<C: ConnectionTrait>(
    db: &C,
) -> Result<entity::offering::Model, DbErr> {
    let id = next_id();
    entity::offering::ActiveModel {
        name: ActiveValue::Set(format!("Service {}", id)),
        description: ActiveValue::Set("Test service".to_string()),
        price: ActiveValue::Set(2_500),
        ..Default::default()
    }
    .insert(db)
    .await
}
