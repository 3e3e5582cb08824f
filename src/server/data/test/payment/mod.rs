use crate::server::{
    data::payment::{PaymentRepository, PAYMENT_QUERY},
    model::payment::{CreatePaymentParams, UpdatePaymentParams},
};
use sea_orm::{DbErr, SqlErr};
use test_utils::{builder::TestBuilder, factory};

use super::list_query;

mod create;
mod get_all;
mod update;
