use crate::server::{
    data::product::{ProductRepository, PRODUCT_QUERY},
    model::product::{CreateProductParams, UpdateProductParams},
};
use chrono::{NaiveDate, NaiveTime};
use entity::sea_orm_active_enums::AuctionStatus;
use sea_orm::{DbErr, EntityTrait, PaginatorTrait, SqlErr};
use test_utils::{builder::TestBuilder, factory};

use super::list_query;

mod create;
mod delete;
mod get_all;
mod get_by_category;
mod get_by_id;
mod update;
