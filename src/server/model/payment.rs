//! Payment domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::payment::{CreatePaymentDto, PaymentDetailDto, PaymentDto, UpdatePaymentDto},
    server::model::auction_winner::AuctionWinner,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Payment {
    pub id: i32,
    pub auction_winner_id: i32,
    pub amount: i64,
    pub transaction_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Payment {
    pub fn from_entity(entity: entity::payment::Model) -> Self {
        Self {
            id: entity.id,
            auction_winner_id: entity.auction_winner_id,
            amount: entity.amount,
            transaction_id: entity.transaction_id,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> PaymentDto {
        PaymentDto {
            id: self.id,
            auction_winner_id: self.auction_winner_id,
            amount: self.amount,
            transaction_id: self.transaction_id,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PaymentDetail {
    pub payment: Payment,
    pub auction_winner: Option<AuctionWinner>,
}

impl PaymentDetail {
    pub fn into_dto(self) -> PaymentDetailDto {
        PaymentDetailDto {
            payment: self.payment.into_dto(),
            auction_winner: self.auction_winner.map(AuctionWinner::into_dto),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreatePaymentParams {
    pub auction_winner_id: i32,
    pub amount: i64,
    pub transaction_id: Option<String>,
}

impl CreatePaymentParams {
    pub fn from_dto(dto: CreatePaymentDto) -> Self {
        Self {
            auction_winner_id: dto.auction_winner_id,
            amount: dto.amount,
            transaction_id: dto.transaction_id,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdatePaymentParams {
    pub amount: Option<i64>,
    pub transaction_id: Option<String>,
}

impl UpdatePaymentParams {
    pub fn from_dto(dto: UpdatePaymentDto) -> Self {
        Self {
            amount: dto.amount,
            transaction_id: dto.transaction_id,
        }
    }
}
