use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookingDto {
    pub id: i32,
    pub user_id: i32,
    pub cabin_id: i32,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub status: String,
    pub service_ids: Vec<i32>,
}

/// Request body for both creating and replacing a booking.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequestDto {
    pub user_id: i32,
    pub cabin_id: i32,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub status: String,
    #[serde(default)]
    pub service_ids: Vec<i32>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct AvailabilityDto {
    pub available: bool,
}
