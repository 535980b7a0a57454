use sea_orm::DatabaseConnection;

use crate::server::{
    data::offering::OfferingRepository,
    error::AppError,
    model::offering::{Offering, OfferingParams},
};

pub struct OfferingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OfferingService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: OfferingParams) -> Result<Offering, AppError> {
        if params.price < 0 {
            return Err(AppError::BadRequest(
                "Service price cannot be negative".to_string(),
            ));
        }

        Ok(OfferingRepository::new(self.db).create(params).await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Offering, AppError> {
        OfferingRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Service {} not found", id)))
    }

    pub async fn get_all(&self) -> Result<Vec<Offering>, AppError> {
        Ok(OfferingRepository::new(self.db).get_all().await?)
    }
}
