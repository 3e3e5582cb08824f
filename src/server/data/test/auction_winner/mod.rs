use crate::server::{
    data::auction_winner::{AuctionWinnerRepository, AUCTION_WINNER_QUERY},
    model::auction_winner::{CreateAuctionWinnerParams, UpdateAuctionWinnerParams},
};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait, SqlErr};
use test_utils::{builder::TestBuilder, factory};

use super::list_query;

mod create;
mod get_all;
mod get_by_id;
mod update;
