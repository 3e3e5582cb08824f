use entity::product_category::Column;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::category::CategoryRepository,
    error::AppError,
    model::{
        category::{Category, CategoryDetail, CreateCategoryParams, UpdateCategoryParams},
        page::Page,
    },
    query::ListQuery,
};

pub struct CategoryService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CategoryService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateCategoryParams) -> Result<Category, AppError> {
        Ok(CategoryRepository::new(self.db).create(params).await?)
    }

    pub async fn get_all(&self, query: ListQuery<Column>) -> Result<Page<CategoryDetail>, AppError> {
        let (items, total) = CategoryRepository::new(self.db).get_all(&query).await?;

        Ok(Page {
            items,
            total,
            pagination: query.pagination,
        })
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<CategoryDetail>, AppError> {
        Ok(CategoryRepository::new(self.db).get_by_id(id).await?)
    }

    pub async fn update(
        &self,
        id: i32,
        params: UpdateCategoryParams,
    ) -> Result<Option<CategoryDetail>, AppError> {
        Ok(CategoryRepository::new(self.db).update(id, params).await?)
    }

    pub async fn delete(&self, id: i32) -> Result<Option<Category>, AppError> {
        Ok(CategoryRepository::new(self.db).delete(id).await?)
    }
}
