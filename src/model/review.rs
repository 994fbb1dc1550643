use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A review together with summaries of its author and the reviewed business
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReviewDto {
    pub id: i32,
    pub user_id: i32,
    pub business_id: i32,
    pub review: String,
    pub stars: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    #[serde(rename = "User")]
    pub user: ReviewUserDto,
    #[serde(rename = "Business")]
    pub business: ReviewBusinessDto,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReviewUserDto {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReviewBusinessDto {
    pub id: i32,
    pub owner_id: i32,
    pub name: String,
    pub category: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub price_range: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct ReviewListDto {
    #[serde(rename = "Reviews")]
    pub reviews: Vec<ReviewDto>,
}
