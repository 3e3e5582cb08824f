//! Bidding history domain models and parameters.
//!
//! A bid never carries a client-supplied amount: it is always the product's current price
//! plus its increment at the moment the bid is accepted.

use chrono::{DateTime, Utc};

use crate::{
    model::bid::{BidDetailDto, BidDto, CreateBidDto, UpdateBidDto},
    server::model::{product::Product, user::User},
};

#[derive(Debug, Clone, PartialEq)]
pub struct Bid {
    pub id: i32,
    pub product_id: i32,
    pub bidder_id: i32,
    pub amount: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Bid {
    pub fn from_entity(entity: entity::auction_bidding_history::Model) -> Self {
        Self {
            id: entity.id,
            product_id: entity.product_id,
            bidder_id: entity.bidder_id,
            amount: entity.amount,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> BidDto {
        BidDto {
            id: self.id,
            product_id: self.product_id,
            bidder_id: self.bidder_id,
            amount: self.amount,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BidDetail {
    pub bid: Bid,
    pub product: Option<Product>,
    pub bidder: Option<User>,
}

impl BidDetail {
    pub fn into_dto(self) -> BidDetailDto {
        BidDetailDto {
            bid: self.bid.into_dto(),
            product: self.product.map(Product::into_dto),
            bidder: self.bidder.map(User::into_dto),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct PlaceBidParams {
    pub product_id: i32,
    pub bidder_id: i32,
}

impl PlaceBidParams {
    pub fn from_dto(dto: CreateBidDto) -> Self {
        Self {
            product_id: dto.product_id,
            bidder_id: dto.bidder_id,
        }
    }
}

/// Outcome of a single compare-and-swap bidding attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum BidAttempt {
    Placed(BidDetail),
    ProductNotFound,
    /// Another bid moved the price between read and update.
    Contended,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateBidParams {
    pub amount: Option<i64>,
}

impl UpdateBidParams {
    pub fn from_dto(dto: UpdateBidDto) -> Self {
        Self { amount: dto.amount }
    }
}
