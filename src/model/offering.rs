use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ServiceDto {
    pub id: i32,
    pub name: String,
    pub description: String,
    /// Price in minor currency units
    pub price: i64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ServiceRequestDto {
    pub name: String,
    pub description: String,
    pub price: i64,
}
