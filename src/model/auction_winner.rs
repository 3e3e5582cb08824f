use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::model::{payment::PaymentDto, product::ProductDto, user::UserDto};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuctionWinnerDto {
    pub id: i32,
    pub product_id: i32,
    pub auction_winner_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuctionWinnerDetailDto {
    #[serde(flatten)]
    pub auction_winner: AuctionWinnerDto,
    pub product: Option<ProductDto>,
    pub winner: Option<UserDto>,
    pub payment: Option<PaymentDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateAuctionWinnerDto {
    #[validate(range(min = 1, message = "must be a valid id"))]
    pub product_id: i32,
    #[validate(range(min = 1, message = "must be a valid id"))]
    pub auction_winner_id: i32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAuctionWinnerDto {
    #[validate(range(min = 1, message = "must be a valid id"))]
    pub auction_winner_id: Option<i32>,
}
