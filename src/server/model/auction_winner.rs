//! Auction winner domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::auction_winner::{
        AuctionWinnerDetailDto, AuctionWinnerDto, CreateAuctionWinnerDto, UpdateAuctionWinnerDto,
    },
    server::model::{payment::Payment, product::Product, user::User},
};

#[derive(Debug, Clone, PartialEq)]
pub struct AuctionWinner {
    pub id: i32,
    pub product_id: i32,
    /// Id of the winning user.
    pub auction_winner_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl AuctionWinner {
    pub fn from_entity(entity: entity::auction_winner::Model) -> Self {
        Self {
            id: entity.id,
            product_id: entity.product_id,
            auction_winner_id: entity.auction_winner_id,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> AuctionWinnerDto {
        AuctionWinnerDto {
            id: self.id,
            product_id: self.product_id,
            auction_winner_id: self.auction_winner_id,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AuctionWinnerDetail {
    pub auction_winner: AuctionWinner,
    pub product: Option<Product>,
    pub winner: Option<User>,
    pub payment: Option<Payment>,
}

impl AuctionWinnerDetail {
    pub fn into_dto(self) -> AuctionWinnerDetailDto {
        AuctionWinnerDetailDto {
            auction_winner: self.auction_winner.into_dto(),
            product: self.product.map(Product::into_dto),
            winner: self.winner.map(User::into_dto),
            payment: self.payment.map(Payment::into_dto),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CreateAuctionWinnerParams {
    pub product_id: i32,
    pub auction_winner_id: i32,
}

impl CreateAuctionWinnerParams {
    pub fn from_dto(dto: CreateAuctionWinnerDto) -> Self {
        Self {
            product_id: dto.product_id,
            auction_winner_id: dto.auction_winner_id,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateAuctionWinnerParams {
    pub auction_winner_id: Option<i32>,
}

impl UpdateAuctionWinnerParams {
    pub fn from_dto(dto: UpdateAuctionWinnerDto) -> Self {
        Self {
            auction_winner_id: dto.auction_winner_id,
        }
    }
}
