use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CabinDto {
    pub id: i32,
    pub name: String,
    pub short_description: String,
    pub long_description: String,
    pub capacity: i32,
    /// Nightly price in minor currency units
    pub price_per_night: i64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CabinRequestDto {
    pub name: String,
    pub short_description: String,
    pub long_description: String,
    pub capacity: i32,
    pub price_per_night: i64,
}
