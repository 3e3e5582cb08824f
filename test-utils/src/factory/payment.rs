//! Payment factory.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a payment without a transaction id for the given auction winner.
pub async fn create_payment(
    db: &DatabaseConnection,
    auction_winner_id: i32,
    amount: i64,
) -> Result<entity::payment::Model, DbErr> {
    let now = Utc::now();
    entity::payment::ActiveModel {
        auction_winner_id: ActiveValue::Set(auction_winner_id),
        amount: ActiveValue::Set(amount),
        transaction_id: ActiveValue::Set(None),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
}
