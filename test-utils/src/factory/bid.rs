//! Bidding history factory.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Inserts a bidding history row directly, bypassing the product price update.
pub async fn create_bid(
    db: &DatabaseConnection,
    product_id: i32,
    bidder_id: i32,
    amount: i64,
) -> Result<entity::auction_bidding_history::Model, DbErr> {
    let now = Utc::now();
    entity::auction_bidding_history::ActiveModel {
        product_id: ActiveValue::Set(product_id),
        bidder_id: ActiveValue::Set(bidder_id),
        amount: ActiveValue::Set(amount),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
}
