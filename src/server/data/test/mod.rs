use std::collections::HashMap;

use sea_orm::ColumnTrait;

use crate::server::query::{filter::QuerySpec, ListQuery};

mod auction_winner;
mod bid;
mod category;
mod message;
mod payment;
mod product;
mod user;

/// Parses `pairs` as a list query string against `fields`.
fn list_query<C: ColumnTrait + Copy>(pairs: &[(&str, &str)], fields: &QuerySpec<C>) -> ListQuery<C> {
    let params: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

    ListQuery::parse(&params, fields).unwrap()
}
