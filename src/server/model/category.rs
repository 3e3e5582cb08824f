//! Product category domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::category::{CategoryDetailDto, CategoryDto, CreateCategoryDto, UpdateCategoryDto},
    server::model::product::Product,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub id: i32,
    pub category_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Category {
    pub fn from_entity(entity: entity::product_category::Model) -> Self {
        Self {
            id: entity.id,
            category_name: entity.category_name,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> CategoryDto {
        CategoryDto {
            id: self.id,
            category_name: self.category_name,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Category with every product filed under it.
#[derive(Debug, Clone)]
pub struct CategoryDetail {
    pub category: Category,
    pub products: Vec<Product>,
}

impl CategoryDetail {
    pub fn into_dto(self) -> CategoryDetailDto {
        CategoryDetailDto {
            category: self.category.into_dto(),
            products: self.products.into_iter().map(Product::into_dto).collect(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateCategoryParams {
    pub category_name: String,
}

impl CreateCategoryParams {
    pub fn from_dto(dto: CreateCategoryDto) -> Self {
        Self {
            category_name: dto.category_name,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateCategoryParams {
    pub category_name: Option<String>,
}

impl UpdateCategoryParams {
    pub fn from_dto(dto: UpdateCategoryDto) -> Self {
        Self {
            category_name: dto.category_name,
        }
    }
}
