//! SeaORM entity models for the auction marketplace schema.

pub mod prelude;

pub mod auction_bidding_history;
pub mod auction_winner;
pub mod payment;
pub mod product;
pub mod product_category;
pub mod product_message;
pub mod sea_orm_active_enums;
pub mod user;
