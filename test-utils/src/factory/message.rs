//! Product message factory.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub async fn create_message(
    db: &DatabaseConnection,
    product_id: i32,
    sender_id: i32,
    content: impl Into<String>,
) -> Result<entity::product_message::Model, DbErr> {
    let now = Utc::now();
    entity::product_message::ActiveModel {
        content: ActiveValue::Set(content.into()),
        product_id: ActiveValue::Set(product_id),
        sender_id: ActiveValue::Set(sender_id),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
}
