use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::model::{auction_winner::AuctionWinnerDto, not_blank};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaymentDto {
    pub id: i32,
    pub auction_winner_id: i32,
    pub amount: i64,
    pub transaction_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaymentDetailDto {
    #[serde(flatten)]
    pub payment: PaymentDto,
    pub auction_winner: Option<AuctionWinnerDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreatePaymentDto {
    #[validate(range(min = 1, message = "must be a valid id"))]
    pub auction_winner_id: i32,
    #[validate(range(min = 0, message = "must not be negative"))]
    pub amount: i64,
    #[validate(custom(function = "not_blank"))]
    pub transaction_id: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePaymentDto {
    #[validate(range(min = 0, message = "must not be negative"))]
    pub amount: Option<i64>,
    #[validate(custom(function = "not_blank"))]
    pub transaction_id: Option<String>,
}
