//! Product message domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::message::{CreateMessageDto, MessageDetailDto, MessageDto, UpdateMessageDto},
    server::model::{product::Product, user::User},
};

#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub id: i32,
    pub content: String,
    pub product_id: i32,
    pub sender_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Message {
    pub fn from_entity(entity: entity::product_message::Model) -> Self {
        Self {
            id: entity.id,
            content: entity.content,
            product_id: entity.product_id,
            sender_id: entity.sender_id,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> MessageDto {
        MessageDto {
            id: self.id,
            content: self.content,
            product_id: self.product_id,
            sender_id: self.sender_id,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct MessageDetail {
    pub message: Message,
    pub product: Option<Product>,
    pub sender: Option<User>,
}

impl MessageDetail {
    pub fn into_dto(self) -> MessageDetailDto {
        MessageDetailDto {
            message: self.message.into_dto(),
            product: self.product.map(Product::into_dto),
            sender: self.sender.map(User::into_dto),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateMessageParams {
    pub content: String,
    pub product_id: i32,
    pub sender_id: i32,
}

impl CreateMessageParams {
    pub fn from_dto(dto: CreateMessageDto) -> Self {
        Self {
            content: dto.content,
            product_id: dto.product_id,
            sender_id: dto.sender_id,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateMessageParams {
    pub content: Option<String>,
}

impl UpdateMessageParams {
    pub fn from_dto(dto: UpdateMessageDto) -> Self {
        Self {
            content: dto.content,
        }
    }
}
