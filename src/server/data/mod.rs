//! Database repository layer for all domain entities.
//!
//! Repositories use SeaORM entity models internally and return domain models, keeping the
//! data layer separate from business logic. Each repository also declares the `QuerySpec`
//! describing which query parameters its list endpoint accepts.

pub mod auction_winner;
pub mod bid;
pub mod category;
pub mod message;
pub mod payment;
pub mod product;
pub mod user;

#[cfg(test)]
mod test;

use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect,
};

use crate::server::query::ListQuery;

/// Runs a filtered, ordered and windowed select for `E`.
///
/// # Returns
/// - `Ok((rows, total))` - Rows of the requested page and the number of rows matching the
///   filters across all pages
/// - `Err(DbErr)` - Database error during either query
pub(crate) async fn find_page<E>(
    db: &DatabaseConnection,
    query: &ListQuery<E::Column>,
) -> Result<(Vec<E::Model>, u64), DbErr>
where
    E: EntityTrait,
    E::Model: Sync,
    E::Column: ColumnTrait + Copy,
{
    let select = E::find().filter(query.condition.clone());

    let total = select.clone().count(db).await?;

    let rows = select
        .order_by(query.sort_column, query.sort_order.clone())
        .offset(query.pagination.skip)
        .limit(query.pagination.limit)
        .all(db)
        .await?;

    Ok((rows, total))
}
