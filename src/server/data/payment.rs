use std::collections::HashMap;

use chrono::Utc;
use entity::payment::Column;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, ModelTrait, QueryFilter,
};

use crate::server::{
    data::find_page,
    model::{
        auction_winner::AuctionWinner,
        payment::{CreatePaymentParams, Payment, PaymentDetail, UpdatePaymentParams},
    },
    query::{filter::QuerySpec, ListQuery},
};

pub static PAYMENT_QUERY: QuerySpec<Column> = QuerySpec {
    searchable: &[],
    filterable: &[],
    relational: &[],
    price: None,
    sortable: &[
        ("amount", Column::Amount),
        ("createdAt", Column::CreatedAt),
        ("updatedAt", Column::UpdatedAt),
        ("id", Column::Id),
    ],
    default_sort: Column::CreatedAt,
};

pub struct PaymentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PaymentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreatePaymentParams) -> Result<Payment, DbErr> {
        let now = Utc::now();
        let payment = entity::payment::ActiveModel {
            auction_winner_id: ActiveValue::Set(params.auction_winner_id),
            amount: ActiveValue::Set(params.amount),
            transaction_id: ActiveValue::Set(params.transaction_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Payment::from_entity(payment))
    }

    pub async fn get_all(
        &self,
        query: &ListQuery<Column>,
    ) -> Result<(Vec<PaymentDetail>, u64), DbErr> {
        let (payments, total) = find_page::<entity::prelude::Payment>(self.db, query).await?;

        Ok((self.expand(payments).await?, total))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<PaymentDetail>, DbErr> {
        let payment = entity::prelude::Payment::find_by_id(id).one(self.db).await?;

        Ok(self.expand(payment.into_iter().collect()).await?.pop())
    }

    pub async fn update(
        &self,
        id: i32,
        params: UpdatePaymentParams,
    ) -> Result<Option<PaymentDetail>, DbErr> {
        let Some(payment) = entity::prelude::Payment::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active = payment.into_active_model();
        if let Some(amount) = params.amount {
            active.amount = ActiveValue::Set(amount);
        }
        if let Some(transaction_id) = params.transaction_id {
            active.transaction_id = ActiveValue::Set(Some(transaction_id));
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        let payment = active.update(self.db).await?;

        Ok(self.expand(vec![payment]).await?.pop())
    }

    pub async fn delete(&self, id: i32) -> Result<Option<Payment>, DbErr> {
        let Some(payment) = entity::prelude::Payment::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        payment.clone().delete(self.db).await?;

        Ok(Some(Payment::from_entity(payment)))
    }

    /// Loads the auction winner record of every payment with one query.
    async fn expand(
        &self,
        payments: Vec<entity::payment::Model>,
    ) -> Result<Vec<PaymentDetail>, DbErr> {
        if payments.is_empty() {
            return Ok(Vec::new());
        }

        let winner_ids: Vec<i32> = payments.iter().map(|p| p.auction_winner_id).collect();

        let winners: HashMap<i32, AuctionWinner> = entity::prelude::AuctionWinner::find()
            .filter(entity::auction_winner::Column::Id.is_in(winner_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|w| (w.id, AuctionWinner::from_entity(w)))
            .collect();

        Ok(payments
            .into_iter()
            .map(|payment| PaymentDetail {
                auction_winner: winners.get(&payment.auction_winner_id).cloned(),
                payment: Payment::from_entity(payment),
            })
            .collect())
    }
}
