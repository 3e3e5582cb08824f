//! Auction winner factory.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub async fn create_auction_winner(
    db: &DatabaseConnection,
    product_id: i32,
    auction_winner_id: i32,
) -> Result<entity::auction_winner::Model, DbErr> {
    let now = Utc::now();
    entity::auction_winner::ActiveModel {
        product_id: ActiveValue::Set(product_id),
        auction_winner_id: ActiveValue::Set(auction_winner_id),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
}
