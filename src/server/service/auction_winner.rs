use entity::auction_winner::Column;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::auction_winner::AuctionWinnerRepository,
    error::AppError,
    model::{
        auction_winner::{
            AuctionWinner, AuctionWinnerDetail, CreateAuctionWinnerParams,
            UpdateAuctionWinnerParams,
        },
        page::Page,
    },
    query::ListQuery,
};

pub struct AuctionWinnerService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuctionWinnerService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a winner and returns it with product, winning user and payment expanded.
    pub async fn create(
        &self,
        params: CreateAuctionWinnerParams,
    ) -> Result<AuctionWinnerDetail, AppError> {
        let repo = AuctionWinnerRepository::new(self.db);

        let winner = repo.create(params).await?;

        repo.get_by_id(winner.id)
            .await?
            .ok_or_else(|| AppError::NotFound("Auction winner not found after creation".to_string()))
    }

    pub async fn get_all(
        &self,
        query: ListQuery<Column>,
    ) -> Result<Page<AuctionWinnerDetail>, AppError> {
        let (items, total) = AuctionWinnerRepository::new(self.db)
            .get_all(&query)
            .await?;

        Ok(Page {
            items,
            total,
            pagination: query.pagination,
        })
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<AuctionWinnerDetail>, AppError> {
        Ok(AuctionWinnerRepository::new(self.db).get_by_id(id).await?)
    }

    pub async fn update(
        &self,
        id: i32,
        params: UpdateAuctionWinnerParams,
    ) -> Result<Option<AuctionWinnerDetail>, AppError> {
        Ok(AuctionWinnerRepository::new(self.db)
            .update(id, params)
            .await?)
    }

    pub async fn delete(&self, id: i32) -> Result<Option<AuctionWinner>, AppError> {
        Ok(AuctionWinnerRepository::new(self.db).delete(id).await?)
    }
}
