use crate::server::{
    data::message::{MessageRepository, MESSAGE_QUERY},
    model::message::{CreateMessageParams, UpdateMessageParams},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use super::list_query;

mod create;
mod get_all;
mod get_by_id;
mod update;
