use std::collections::HashMap;

use chrono::Utc;
use entity::product_message::Column;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, ModelTrait, QueryFilter,
};

use crate::server::{
    data::find_page,
    model::{
        message::{CreateMessageParams, Message, MessageDetail, UpdateMessageParams},
        product::Product,
        user::User,
    },
    query::{
        filter::{Field, FieldKind, QuerySpec},
        ListQuery,
    },
};

pub static MESSAGE_QUERY: QuerySpec<Column> = QuerySpec {
    searchable: &[Column::Content],
    filterable: &[
        Field::new("productId", Column::ProductId, FieldKind::Integer),
        Field::new("senderId", Column::SenderId, FieldKind::Integer),
    ],
    relational: &[],
    price: None,
    sortable: &[
        ("createdAt", Column::CreatedAt),
        ("updatedAt", Column::UpdatedAt),
        ("id", Column::Id),
    ],
    default_sort: Column::CreatedAt,
};

pub struct MessageRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MessageRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateMessageParams) -> Result<Message, DbErr> {
        let now = Utc::now();
        let message = entity::product_message::ActiveModel {
            content: ActiveValue::Set(params.content),
            product_id: ActiveValue::Set(params.product_id),
            sender_id: ActiveValue::Set(params.sender_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Message::from_entity(message))
    }

    pub async fn get_all(
        &self,
        query: &ListQuery<Column>,
    ) -> Result<(Vec<MessageDetail>, u64), DbErr> {
        let (messages, total) =
            find_page::<entity::prelude::ProductMessage>(self.db, query).await?;

        Ok((self.expand(messages).await?, total))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<MessageDetail>, DbErr> {
        let message = entity::prelude::ProductMessage::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(self.expand(message.into_iter().collect()).await?.pop())
    }

    pub async fn update(
        &self,
        id: i32,
        params: UpdateMessageParams,
    ) -> Result<Option<MessageDetail>, DbErr> {
        let Some(message) = entity::prelude::ProductMessage::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active = message.into_active_model();
        if let Some(content) = params.content {
            active.content = ActiveValue::Set(content);
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        let message = active.update(self.db).await?;

        Ok(self.expand(vec![message]).await?.pop())
    }

    pub async fn delete(&self, id: i32) -> Result<Option<Message>, DbErr> {
        let Some(message) = entity::prelude::ProductMessage::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        message.clone().delete(self.db).await?;

        Ok(Some(Message::from_entity(message)))
    }

    /// Loads the product and sender of every message with one query each.
    async fn expand(
        &self,
        messages: Vec<entity::product_message::Model>,
    ) -> Result<Vec<MessageDetail>, DbErr> {
        if messages.is_empty() {
            return Ok(Vec::new());
        }

        let product_ids: Vec<i32> = messages.iter().map(|m| m.product_id).collect();
        let sender_ids: Vec<i32> = messages.iter().map(|m| m.sender_id).collect();

        let products: HashMap<i32, Product> = entity::prelude::Product::find()
            .filter(entity::product::Column::Id.is_in(product_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|p| (p.id, Product::from_entity(p)))
            .collect();

        let senders: HashMap<i32, User> = entity::prelude::User::find()
            .filter(entity::user::Column::Id.is_in(sender_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|u| (u.id, User::from_entity(u)))
            .collect();

        Ok(messages
            .into_iter()
            .map(|message| MessageDetail {
                product: products.get(&message.product_id).cloned(),
                sender: senders.get(&message.sender_id).cloned(),
                message: Message::from_entity(message),
            })
            .collect())
    }
}
