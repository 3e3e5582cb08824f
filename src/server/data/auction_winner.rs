use std::collections::HashMap;

use chrono::Utc;
use entity::auction_winner::Column;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, ModelTrait, QueryFilter, TransactionTrait,
};

use crate::server::{
    data::find_page,
    model::{
        auction_winner::{
            AuctionWinner, AuctionWinnerDetail, CreateAuctionWinnerParams,
            UpdateAuctionWinnerParams,
        },
        payment::Payment,
        product::Product,
        user::User,
    },
    query::{
        filter::{Field, FieldKind, QuerySpec},
        ListQuery,
    },
};

pub static AUCTION_WINNER_QUERY: QuerySpec<Column> = QuerySpec {
    searchable: &[],
    filterable: &[
        Field::new("productId", Column::ProductId, FieldKind::Integer),
        Field::new("auctionWinnerId", Column::AuctionWinnerId, FieldKind::Integer),
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

pub struct AuctionWinnerRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuctionWinnerRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records the winner of a product's auction inside a transaction.
    ///
    /// A product can only be won once; a second winner fails the unique index on
    /// `product_id`. No payment is created.
    pub async fn create(&self, params: CreateAuctionWinnerParams) -> Result<AuctionWinner, DbErr> {
        let txn = self.db.begin().await?;

        let now = Utc::now();
        let winner = entity::auction_winner::ActiveModel {
            product_id: ActiveValue::Set(params.product_id),
            auction_winner_id: ActiveValue::Set(params.auction_winner_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;

        Ok(AuctionWinner::from_entity(winner))
    }

    pub async fn get_all(
        &self,
        query: &ListQuery<Column>,
    ) -> Result<(Vec<AuctionWinnerDetail>, u64), DbErr> {
        let (winners, total) = find_page::<entity::prelude::AuctionWinner>(self.db, query).await?;

        Ok((self.expand(winners).await?, total))
    }

    /// Gets a winner row with its product, winning user and payment.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<AuctionWinnerDetail>, DbErr> {
        let winner = entity::prelude::AuctionWinner::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(self.expand(winner.into_iter().collect()).await?.pop())
    }

    pub async fn update(
        &self,
        id: i32,
        params: UpdateAuctionWinnerParams,
    ) -> Result<Option<AuctionWinnerDetail>, DbErr> {
        let Some(winner) = entity::prelude::AuctionWinner::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active = winner.into_active_model();
        if let Some(auction_winner_id) = params.auction_winner_id {
            active.auction_winner_id = ActiveValue::Set(auction_winner_id);
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        let winner = active.update(self.db).await?;

        Ok(self.expand(vec![winner]).await?.pop())
    }

    pub async fn delete(&self, id: i32) -> Result<Option<AuctionWinner>, DbErr> {
        let Some(winner) = entity::prelude::AuctionWinner::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        winner.clone().delete(self.db).await?;

        Ok(Some(AuctionWinner::from_entity(winner)))
    }

    /// Loads the product, winning user and payment of every winner row with one query each.
    async fn expand(
        &self,
        winners: Vec<entity::auction_winner::Model>,
    ) -> Result<Vec<AuctionWinnerDetail>, DbErr> {
        if winners.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<i32> = winners.iter().map(|w| w.id).collect();
        let product_ids: Vec<i32> = winners.iter().map(|w| w.product_id).collect();
        let user_ids: Vec<i32> = winners.iter().map(|w| w.auction_winner_id).collect();

        let products: HashMap<i32, Product> = entity::prelude::Product::find()
            .filter(entity::product::Column::Id.is_in(product_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|p| (p.id, Product::from_entity(p)))
            .collect();

        let users: HashMap<i32, User> = entity::prelude::User::find()
            .filter(entity::user::Column::Id.is_in(user_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|u| (u.id, User::from_entity(u)))
            .collect();

        let payments: HashMap<i32, Payment> = entity::prelude::Payment::find()
            .filter(entity::payment::Column::AuctionWinnerId.is_in(ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|p| (p.auction_winner_id, Payment::from_entity(p)))
            .collect();

        Ok(winners
            .into_iter()
            .map(|winner| AuctionWinnerDetail {
                product: products.get(&winner.product_id).cloned(),
                winner: users.get(&winner.auction_winner_id).cloned(),
                payment: payments.get(&winner.id).cloned(),
                auction_winner: AuctionWinner::from_entity(winner),
            })
            .collect())
    }
}
