use entity::{product::Column, sea_orm_active_enums::AuctionStatus};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::product::ProductRepository,
    error::AppError,
    model::{
        page::Page,
        product::{CreateProductParams, ProductDetail, UpdateProductParams},
    },
    query::ListQuery,
};

pub struct ProductService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProductService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateProductParams) -> Result<ProductDetail, AppError> {
        Ok(ProductRepository::new(self.db).create(params).await?)
    }

    pub async fn get_all(&self, query: ListQuery<Column>) -> Result<Page<ProductDetail>, AppError> {
        let (items, total) = ProductRepository::new(self.db).get_all(&query).await?;

        Ok(Page {
            items,
            total,
            pagination: query.pagination,
        })
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<ProductDetail>, AppError> {
        Ok(ProductRepository::new(self.db).get_by_id(id).await?)
    }

    /// Gets every product listed under a category, with relations.
    pub async fn get_by_category(&self, category_id: i32) -> Result<Vec<ProductDetail>, AppError> {
        Ok(ProductRepository::new(self.db)
            .get_by_category(category_id)
            .await?)
    }

    pub async fn update(
        &self,
        id: i32,
        params: UpdateProductParams,
    ) -> Result<Option<ProductDetail>, AppError> {
        Ok(ProductRepository::new(self.db).update(id, params).await?)
    }

    pub async fn delete(&self, id: i32) -> Result<Option<ProductDetail>, AppError> {
        Ok(ProductRepository::new(self.db).delete(id).await?)
    }

    /// Opens bidding. Any current status is overwritten.
    pub async fn start_bidding(&self, id: i32) -> Result<Option<ProductDetail>, AppError> {
        self.set_status(id, AuctionStatus::Ongoing).await
    }

    /// Closes bidding. Any current status is overwritten.
    pub async fn end_bidding(&self, id: i32) -> Result<Option<ProductDetail>, AppError> {
        self.set_status(id, AuctionStatus::End).await
    }

    async fn set_status(&self, id: i32, status: AuctionStatus) -> Result<Option<ProductDetail>, AppError> {
        let product = ProductRepository::new(self.db)
            .update(id, UpdateProductParams::status(status))
            .await?;

        if let Some(detail) = &product {
            tracing::info!(product_id = detail.product.id, ?status, "Auction status changed");
        }

        Ok(product)
    }
}
