use crate::server::{
    data::bid::{BidRepository, BID_QUERY},
    model::bid::{BidAttempt, PlaceBidParams, UpdateBidParams},
};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

use super::list_query;

mod delete;
mod get_all;
mod get_by_id;
mod try_place;
mod update;
