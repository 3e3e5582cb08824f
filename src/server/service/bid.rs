use entity::auction_bidding_history::Column;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::bid::BidRepository,
    error::AppError,
    model::{
        bid::{Bid, BidAttempt, BidDetail, PlaceBidParams, UpdateBidParams},
        page::Page,
    },
    query::ListQuery,
    realtime::{publish_json, EventPublisher, PublishError, Topic},
};

/// Attempts made before a contended bid is reported as a conflict.
const MAX_BID_ATTEMPTS: usize = 5;

pub struct BidService<'a> {
    db: &'a DatabaseConnection,
    events: &'a dyn EventPublisher,
}

impl<'a> BidService<'a> {
    pub fn new(db: &'a DatabaseConnection, events: &'a dyn EventPublisher) -> Self {
        Self { db, events }
    }

    /// Places a bid at the product's current price plus its increment.
    ///
    /// The price update and the bid insert commit together. A lost race against another
    /// bid on the same product restarts the whole attempt. The `bidUpdate` event is
    /// published only after commit, and a failed publish does not undo the bid.
    ///
    /// # Returns
    /// - `Ok(BidDetail)` - The recorded bid with its product and bidder
    /// - `Err(AppError::NotFound)` - Product does not exist; nothing was written
    /// - `Err(AppError::Conflict)` - Every attempt lost the race
    pub async fn place(&self, params: PlaceBidParams) -> Result<BidDetail, AppError> {
        let repo = BidRepository::new(self.db);

        for attempt in 1..=MAX_BID_ATTEMPTS {
            match repo.try_place(params).await? {
                BidAttempt::Placed(detail) => {
                    self.announce(&detail);
                    return Ok(detail);
                }
                BidAttempt::ProductNotFound => {
                    return Err(AppError::NotFound(
                        "No product found with this id".to_string(),
                    ));
                }
                BidAttempt::Contended => {
                    tracing::debug!(
                        product_id = params.product_id,
                        attempt,
                        "Bid lost price race, retrying"
                    );
                }
            }
        }

        Err(AppError::Conflict(
            "Product price changed too often, please bid again".to_string(),
        ))
    }

    fn announce(&self, detail: &BidDetail) {
        let bid = &detail.bid;
        match publish_json(self.events, Topic::BidUpdate, &detail.clone().into_dto()) {
            Ok(receivers) => tracing::debug!(bid_id = bid.id, receivers, "Bid update published"),
            Err(PublishError::NoSubscribers) => {
                tracing::debug!(bid_id = bid.id, "Bid update had no listeners")
            }
            Err(e) => tracing::warn!(bid_id = bid.id, "Failed to publish bid update: {}", e),
        }
    }

    pub async fn get_all(&self, query: ListQuery<Column>) -> Result<Page<BidDetail>, AppError> {
        let (items, total) = BidRepository::new(self.db).get_all(&query).await?;

        Ok(Page {
            items,
            total,
            pagination: query.pagination,
        })
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<BidDetail>, AppError> {
        Ok(BidRepository::new(self.db).get_by_id(id).await?)
    }

    pub async fn update(
        &self,
        id: i32,
        params: UpdateBidParams,
    ) -> Result<Option<BidDetail>, AppError> {
        Ok(BidRepository::new(self.db).update(id, params).await?)
    }

    pub async fn delete(&self, id: i32) -> Result<Option<Bid>, AppError> {
        Ok(BidRepository::new(self.db).delete(id).await?)
    }
}
