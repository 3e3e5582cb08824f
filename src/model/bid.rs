use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::model::{product::ProductDto, user::UserDto};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BidDto {
    pub id: i32,
    pub product_id: i32,
    pub bidder_id: i32,
    pub amount: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BidDetailDto {
    #[serde(flatten)]
    pub bid: BidDto,
    pub product: Option<ProductDto>,
    pub bidder: Option<UserDto>,
}

/// Bid request. The amount is computed from the product's current price and never
/// accepted from the client.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateBidDto {
    #[validate(range(min = 1, message = "must be a valid id"))]
    pub product_id: i32,
    #[validate(range(min = 1, message = "must be a valid id"))]
    pub bidder_id: i32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBidDto {
    #[validate(range(min = 0, message = "must not be negative"))]
    pub amount: Option<i64>,
}
