use std::collections::HashMap;

use chrono::Utc;
use entity::auction_bidding_history::Column;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, IntoActiveModel, ModelTrait, QueryFilter, TransactionTrait,
};

use crate::server::{
    data::find_page,
    model::{
        bid::{Bid, BidAttempt, BidDetail, PlaceBidParams, UpdateBidParams},
        product::Product,
        user::User,
    },
    query::{
        filter::{Field, FieldKind, QuerySpec},
        ListQuery,
    },
};

pub static BID_QUERY: QuerySpec<Column> = QuerySpec {
    searchable: &[],
    filterable: &[
        Field::new("productId", Column::ProductId, FieldKind::Integer),
        Field::new("bidderId", Column::BidderId, FieldKind::Integer),
    ],
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

pub struct BidRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BidRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Makes one attempt at placing a bid inside a transaction.
    ///
    /// Reads the product price, raises it by the increment only if it is still the price
    /// that was read, and records the bid at the new price. Nothing is written unless all
    /// three steps succeed.
    ///
    /// # Returns
    /// - `Ok(BidAttempt::Placed(detail))` - Price raised and bid recorded, returned with the
    ///   product at its new price and the bidder
    /// - `Ok(BidAttempt::ProductNotFound)` - No product with `params.product_id`
    /// - `Ok(BidAttempt::Contended)` - Another bid changed the price first; safe to retry
    /// - `Err(DbErr)` - Database error; the transaction is rolled back
    pub async fn try_place(&self, params: PlaceBidParams) -> Result<BidAttempt, DbErr> {
        let txn = self.db.begin().await?;

        let Some(product) = entity::prelude::Product::find_by_id(params.product_id)
            .one(&txn)
            .await?
        else {
            txn.rollback().await?;
            return Ok(BidAttempt::ProductNotFound);
        };

        let observed = product.current_bidding_price;
        let amount = observed + product.increment_amount;
        let now = Utc::now();

        let swapped = entity::prelude::Product::update_many()
            .col_expr(
                entity::product::Column::CurrentBiddingPrice,
                Expr::value(amount),
            )
            .col_expr(entity::product::Column::UpdatedAt, Expr::value(now))
            .filter(entity::product::Column::Id.eq(product.id))
            .filter(entity::product::Column::CurrentBiddingPrice.eq(observed))
            .exec(&txn)
            .await?;

        if swapped.rows_affected == 0 {
            txn.rollback().await?;
            return Ok(BidAttempt::Contended);
        }

        let bid = entity::auction_bidding_history::ActiveModel {
            product_id: ActiveValue::Set(product.id),
            bidder_id: ActiveValue::Set(params.bidder_id),
            amount: ActiveValue::Set(amount),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        let bidder = bid.find_related(entity::prelude::User).one(&txn).await?;

        txn.commit().await?;

        let mut product = Product::from_entity(product);
        product.current_bidding_price = amount;
        product.updated_at = now;

        Ok(BidAttempt::Placed(BidDetail {
            bid: Bid::from_entity(bid),
            product: Some(product),
            bidder: bidder.map(User::from_entity),
        }))
    }

    pub async fn get_all(
        &self,
        query: &ListQuery<Column>,
    ) -> Result<(Vec<BidDetail>, u64), DbErr> {
        let (bids, total) =
            find_page::<entity::prelude::AuctionBiddingHistory>(self.db, query).await?;

        Ok((self.expand(bids).await?, total))
    }

    /// Gets a bid with its product and bidder.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<BidDetail>, DbErr> {
        let bid = entity::prelude::AuctionBiddingHistory::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(self.expand(bid.into_iter().collect()).await?.pop())
    }

    /// Corrects a recorded bid amount. The product price is left as is.
    pub async fn update(
        &self,
        id: i32,
        params: UpdateBidParams,
    ) -> Result<Option<BidDetail>, DbErr> {
        let Some(bid) = entity::prelude::AuctionBiddingHistory::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active = bid.into_active_model();
        if let Some(amount) = params.amount {
            active.amount = ActiveValue::Set(amount);
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        let bid = active.update(self.db).await?;

        Ok(self.expand(vec![bid]).await?.pop())
    }

    pub async fn delete(&self, id: i32) -> Result<Option<Bid>, DbErr> {
        let Some(bid) = entity::prelude::AuctionBiddingHistory::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        bid.clone().delete(self.db).await?;

        Ok(Some(Bid::from_entity(bid)))
    }

    /// Loads the product and bidder of every bid with one query each.
    async fn expand(
        &self,
        bids: Vec<entity::auction_bidding_history::Model>,
    ) -> Result<Vec<BidDetail>, DbErr> {
        if bids.is_empty() {
            return Ok(Vec::new());
        }

        let product_ids: Vec<i32> = bids.iter().map(|b| b.product_id).collect();
        let bidder_ids: Vec<i32> = bids.iter().map(|b| b.bidder_id).collect();

        let products: HashMap<i32, Product> = entity::prelude::Product::find()
            .filter(entity::product::Column::Id.is_in(product_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|p| (p.id, Product::from_entity(p)))
            .collect();

        let bidders: HashMap<i32, User> = entity::prelude::User::find()
            .filter(entity::user::Column::Id.is_in(bidder_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|u| (u.id, User::from_entity(u)))
            .collect();

        Ok(bids
            .into_iter()
            .map(|bid| BidDetail {
                product: products.get(&bid.product_id).cloned(),
                bidder: bidders.get(&bid.bidder_id).cloned(),
                bid: Bid::from_entity(bid),
            })
            .collect())
    }
}
