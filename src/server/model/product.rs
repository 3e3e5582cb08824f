//! Product domain models and parameters.
//!
//! A product is a single auction listing. Its `current_bidding_price` only moves through the
//! bidding repository; the generic update path may also set it for administrative fixes.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use entity::sea_orm_active_enums::AuctionStatus;

use crate::{
    model::product::{
        AuctionStatusDto, CreateProductDto, ProductDetailDto, ProductDto, UpdateProductDto,
    },
    server::model::{
        auction_winner::AuctionWinner, bid::Bid, category::Category, message::Message,
        user::User,
    },
};

impl From<AuctionStatus> for AuctionStatusDto {
    fn from(status: AuctionStatus) -> Self {
        match status {
            AuctionStatus::NotStarted => AuctionStatusDto::NotStarted,
            AuctionStatus::Ongoing => AuctionStatusDto::Ongoing,
            AuctionStatus::End => AuctionStatusDto::End,
        }
    }
}

impl From<AuctionStatusDto> for AuctionStatus {
    fn from(status: AuctionStatusDto) -> Self {
        match status {
            AuctionStatusDto::NotStarted => AuctionStatus::NotStarted,
            AuctionStatusDto::Ongoing => AuctionStatus::Ongoing,
            AuctionStatusDto::End => AuctionStatus::End,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: i32,
    pub product_name: String,
    pub description: String,
    pub image_url: String,
    pub auction_date: NaiveDate,
    pub auction_time: NaiveTime,
    pub auction_status: AuctionStatus,
    pub initial_bidding_price: i64,
    pub current_bidding_price: i64,
    pub increment_amount: i64,
    pub category_id: i32,
    pub product_owner_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    pub fn from_entity(entity: entity::product::Model) -> Self {
        Self {
            id: entity.id,
            product_name: entity.product_name,
            description: entity.description,
            image_url: entity.image_url,
            auction_date: entity.auction_date,
            auction_time: entity.auction_time,
            auction_status: entity.auction_status,
            initial_bidding_price: entity.initial_bidding_price,
            current_bidding_price: entity.current_bidding_price,
            increment_amount: entity.increment_amount,
            category_id: entity.category_id,
            product_owner_id: entity.product_owner_id,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> ProductDto {
        ProductDto {
            id: self.id,
            product_name: self.product_name,
            description: self.description,
            image_url: self.image_url,
            auction_date: self.auction_date,
            auction_time: self.auction_time,
            auction_status: self.auction_status.into(),
            initial_bidding_price: self.initial_bidding_price,
            current_bidding_price: self.current_bidding_price,
            increment_amount: self.increment_amount,
            category_id: self.category_id,
            product_owner_id: self.product_owner_id,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Product with its category, owner, winner, bidding history and messages.
#[derive(Debug, Clone)]
pub struct ProductDetail {
    pub product: Product,
    pub category: Option<Category>,
    pub owner: Option<User>,
    pub auction_winner: Option<AuctionWinner>,
    pub bids: Vec<Bid>,
    pub messages: Vec<Message>,
}

impl ProductDetail {
    pub fn into_dto(self) -> ProductDetailDto {
        ProductDetailDto {
            product: self.product.into_dto(),
            category: self.category.map(Category::into_dto),
            product_owner: self.owner.map(User::into_dto),
            auction_winner: self.auction_winner.map(AuctionWinner::into_dto),
            auction_bidding_history: self.bids.into_iter().map(Bid::into_dto).collect(),
            messages: self.messages.into_iter().map(Message::into_dto).collect(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateProductParams {
    pub product_name: String,
    pub description: String,
    pub image_url: String,
    pub auction_date: NaiveDate,
    pub auction_time: NaiveTime,
    pub auction_status: AuctionStatus,
    pub initial_bidding_price: i64,
    pub current_bidding_price: i64,
    pub increment_amount: i64,
    pub category_id: i32,
    pub product_owner_id: i32,
}

impl CreateProductParams {
    /// New listings start `not_started` and, unless told otherwise, at their initial price.
    pub fn from_dto(dto: CreateProductDto) -> Self {
        Self {
            product_name: dto.product_name,
            description: dto.description,
            image_url: dto.image_url,
            auction_date: dto.auction_date,
            auction_time: dto.auction_time,
            auction_status: dto
                .auction_status
                .map(Into::into)
                .unwrap_or(AuctionStatus::NotStarted),
            initial_bidding_price: dto.initial_bidding_price,
            current_bidding_price: dto
                .current_bidding_price
                .unwrap_or(dto.initial_bidding_price),
            increment_amount: dto.increment_amount,
            category_id: dto.category_id,
            product_owner_id: dto.product_owner_id,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateProductParams {
    pub product_name: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub auction_date: Option<NaiveDate>,
    pub auction_time: Option<NaiveTime>,
    pub auction_status: Option<AuctionStatus>,
    pub initial_bidding_price: Option<i64>,
    pub current_bidding_price: Option<i64>,
    pub increment_amount: Option<i64>,
    pub category_id: Option<i32>,
}

impl UpdateProductParams {
    pub fn from_dto(dto: UpdateProductDto) -> Self {
        Self {
            product_name: dto.product_name,
            description: dto.description,
            image_url: dto.image_url,
            auction_date: dto.auction_date,
            auction_time: dto.auction_time,
            auction_status: dto.auction_status.map(Into::into),
            initial_bidding_price: dto.initial_bidding_price,
            current_bidding_price: dto.current_bidding_price,
            increment_amount: dto.increment_amount,
            category_id: dto.category_id,
        }
    }

    /// Update that only moves the auction lifecycle.
    pub fn status(status: AuctionStatus) -> Self {
        Self {
            auction_status: Some(status),
            ..Default::default()
        }
    }
}
