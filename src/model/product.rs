use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::model::{
    auction_winner::AuctionWinnerDto, bid::BidDto, category::CategoryDto, message::MessageDto,
    not_blank, user::UserDto,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum AuctionStatusDto {
    NotStarted,
    Ongoing,
    End,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    pub id: i32,
    pub product_name: String,
    pub description: String,
    pub image_url: String,
    pub auction_date: NaiveDate,
    pub auction_time: NaiveTime,
    pub auction_status: AuctionStatusDto,
    pub initial_bidding_price: i64,
    pub current_bidding_price: i64,
    pub increment_amount: i64,
    pub category_id: i32,
    pub product_owner_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Product with every declared relation expanded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductDetailDto {
    #[serde(flatten)]
    pub product: ProductDto,
    pub category: Option<CategoryDto>,
    pub product_owner: Option<UserDto>,
    pub auction_winner: Option<AuctionWinnerDto>,
    pub auction_bidding_history: Vec<BidDto>,
    pub messages: Vec<MessageDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductDto {
    #[validate(custom(function = "not_blank"))]
    pub product_name: String,
    #[validate(custom(function = "not_blank"))]
    pub description: String,
    #[validate(custom(function = "not_blank"))]
    pub image_url: String,
    pub auction_date: NaiveDate,
    pub auction_time: NaiveTime,
    pub auction_status: Option<AuctionStatusDto>,
    #[validate(range(min = 0, message = "must not be negative"))]
    pub initial_bidding_price: i64,
    #[validate(range(min = 0, message = "must not be negative"))]
    pub current_bidding_price: Option<i64>,
    #[validate(range(min = 1, message = "must be greater than 0"))]
    pub increment_amount: i64,
    #[validate(range(min = 1, message = "must be a valid id"))]
    pub category_id: i32,
    #[validate(range(min = 1, message = "must be a valid id"))]
    pub product_owner_id: i32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductDto {
    #[validate(custom(function = "not_blank"))]
    pub product_name: Option<String>,
    #[validate(custom(function = "not_blank"))]
    pub description: Option<String>,
    #[validate(custom(function = "not_blank"))]
    pub image_url: Option<String>,
    pub auction_date: Option<NaiveDate>,
    pub auction_time: Option<NaiveTime>,
    pub auction_status: Option<AuctionStatusDto>,
    #[validate(range(min = 0, message = "must not be negative"))]
    pub initial_bidding_price: Option<i64>,
    #[validate(range(min = 0, message = "must not be negative"))]
    pub current_bidding_price: Option<i64>,
    #[validate(range(min = 1, message = "must be greater than 0"))]
    pub increment_amount: Option<i64>,
    #[validate(range(min = 1, message = "must be a valid id"))]
    pub category_id: Option<i32>,
}
