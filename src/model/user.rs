use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::model::{
    auction_winner::AuctionWinnerDto, bid::BidDto, message::MessageDto, not_blank,
    product::ProductDto,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum RoleDto {
    Admin,
    User,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum GenderDto {
    Male,
    Female,
    Others,
}

/// Public projection of a user. The password hash is never part of it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: i32,
    pub full_name: String,
    pub email: String,
    pub role: RoleDto,
    pub contact_number: String,
    pub address: String,
    pub image_url: Option<String>,
    pub gender: GenderDto,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserDetailDto {
    #[serde(flatten)]
    pub user: UserDto,
    pub user_products: Vec<ProductDto>,
    pub winning_products: Vec<AuctionWinnerDto>,
    pub messages: Vec<MessageDto>,
    pub auction_bidding_history: Vec<BidDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserDto {
    #[validate(custom(function = "not_blank"))]
    pub full_name: String,
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,
    #[validate(length(min = 6, message = "must be at least 6 characters"))]
    pub password: String,
    pub role: Option<RoleDto>,
    #[validate(custom(function = "not_blank"))]
    pub contact_number: String,
    #[validate(custom(function = "not_blank"))]
    pub address: String,
    pub image_url: Option<String>,
    pub gender: GenderDto,
}

/// Partial update for a user. Also used by the profile endpoint, which refuses any
/// payload carrying `role`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserDto {
    #[validate(custom(function = "not_blank"))]
    pub full_name: Option<String>,
    #[validate(email(message = "must be a valid email address"))]
    pub email: Option<String>,
    #[validate(length(min = 6, message = "must be at least 6 characters"))]
    pub password: Option<String>,
    pub role: Option<RoleDto>,
    #[validate(custom(function = "not_blank"))]
    pub contact_number: Option<String>,
    #[validate(custom(function = "not_blank"))]
    pub address: Option<String>,
    pub image_url: Option<String>,
    pub gender: Option<GenderDto>,
}
