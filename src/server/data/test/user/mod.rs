use crate::server::{
    data::user::{UserRepository, USER_QUERY},
    model::user::{CreateUserParams, UpdateUserParams},
};
use entity::sea_orm_active_enums::{Gender, UserRole};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait, SqlErr};
use test_utils::{builder::TestBuilder, factory};

use super::list_query;

mod create;
mod delete;
mod find_credentials_by_email;
mod get_all;
mod get_by_id;
mod update;

fn create_params(email: &str) -> CreateUserParams {
    CreateUserParams {
        full_name: "Jane Doe".to_string(),
        email: email.to_string(),
        password: "$2b$04$hash".to_string(),
        role: UserRole::User,
        contact_number: "01700000000".to_string(),
        address: "Dhaka".to_string(),
        image_url: None,
        gender: Gender::Female,
    }
}
