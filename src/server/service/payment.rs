use entity::payment::Column;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::payment::PaymentRepository,
    error::AppError,
    model::{
        page::Page,
        payment::{CreatePaymentParams, Payment, PaymentDetail, UpdatePaymentParams},
    },
    query::ListQuery,
};

pub struct PaymentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PaymentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreatePaymentParams) -> Result<Payment, AppError> {
        Ok(PaymentRepository::new(self.db).create(params).await?)
    }

    pub async fn get_all(&self, query: ListQuery<Column>) -> Result<Page<PaymentDetail>, AppError> {
        let (items, total) = PaymentRepository::new(self.db).get_all(&query).await?;

        Ok(Page {
            items,
            total,
            pagination: query.pagination,
        })
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<PaymentDetail>, AppError> {
        Ok(PaymentRepository::new(self.db).get_by_id(id).await?)
    }

    pub async fn update(
        &self,
        id: i32,
        params: UpdatePaymentParams,
    ) -> Result<Option<PaymentDetail>, AppError> {
        Ok(PaymentRepository::new(self.db).update(id, params).await?)
    }

    pub async fn delete(&self, id: i32) -> Result<Option<Payment>, AppError> {
        Ok(PaymentRepository::new(self.db).delete(id).await?)
    }
}
