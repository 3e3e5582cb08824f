use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::model::{not_blank, product::ProductDto, user::UserDto};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MessageDto {
    pub id: i32,
    pub content: String,
    pub product_id: i32,
    pub sender_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MessageDetailDto {
    #[serde(flatten)]
    pub message: MessageDto,
    pub product: Option<ProductDto>,
    pub sender: Option<UserDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateMessageDto {
    #[validate(custom(function = "not_blank"))]
    pub content: String,
    #[validate(range(min = 1, message = "must be a valid id"))]
    pub product_id: i32,
    #[validate(range(min = 1, message = "must be a valid id"))]
    pub sender_id: i32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMessageDto {
    #[validate(custom(function = "not_blank"))]
    pub content: Option<String>,
}
