use crate::server::{
    data::category::{CategoryRepository, CATEGORY_QUERY},
    model::category::{CreateCategoryParams, UpdateCategoryParams},
};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait, SqlErr};
use test_utils::{builder::TestBuilder, factory};

use super::list_query;

mod create;
mod delete;
mod get_all;
mod get_by_id;
mod update;
