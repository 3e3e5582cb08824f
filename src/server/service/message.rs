use entity::product_message::Column;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::message::MessageRepository,
    error::AppError,
    model::{
        message::{CreateMessageParams, Message, MessageDetail, UpdateMessageParams},
        page::Page,
    },
    query::ListQuery,
};

pub struct MessageService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MessageService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateMessageParams) -> Result<Message, AppError> {
        Ok(MessageRepository::new(self.db).create(params).await?)
    }

    pub async fn get_all(&self, query: ListQuery<Column>) -> Result<Page<MessageDetail>, AppError> {
        let (items, total) = MessageRepository::new(self.db).get_all(&query).await?;

        Ok(Page {
            items,
            total,
            pagination: query.pagination,
        })
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<MessageDetail>, AppError> {
        Ok(MessageRepository::new(self.db).get_by_id(id).await?)
    }

    pub async fn update(
        &self,
        id: i32,
        params: UpdateMessageParams,
    ) -> Result<Option<MessageDetail>, AppError> {
        Ok(MessageRepository::new(self.db).update(id, params).await?)
    }

    pub async fn delete(&self, id: i32) -> Result<Option<Message>, AppError> {
        Ok(MessageRepository::new(self.db).delete(id).await?)
    }
}
