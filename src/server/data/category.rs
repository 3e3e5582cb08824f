use std::collections::HashMap;

use chrono::Utc;
use entity::product_category::Column;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, ModelTrait, QueryFilter,
};

use crate::server::{
    data::find_page,
    model::{
        category::{Category, CategoryDetail, CreateCategoryParams, UpdateCategoryParams},
        product::Product,
    },
    query::{
        filter::{Field, FieldKind, QuerySpec},
        ListQuery,
    },
};

pub static CATEGORY_QUERY: QuerySpec<Column> = QuerySpec {
    searchable: &[Column::CategoryName],
    filterable: &[Field::new("categoryName", Column::CategoryName, FieldKind::Text)],
    relational: &[],
    price: None,
    sortable: &[
        ("categoryName", Column::CategoryName),
        ("createdAt", Column::CreatedAt),
        ("updatedAt", Column::UpdatedAt),
        ("id", Column::Id),
    ],
    default_sort: Column::CreatedAt,
};

pub struct CategoryRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CategoryRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateCategoryParams) -> Result<Category, DbErr> {
        let now = Utc::now();
        let category = entity::product_category::ActiveModel {
            category_name: ActiveValue::Set(params.category_name),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Category::from_entity(category))
    }

    pub async fn get_all(
        &self,
        query: &ListQuery<Column>,
    ) -> Result<(Vec<CategoryDetail>, u64), DbErr> {
        let (categories, total) =
            find_page::<entity::prelude::ProductCategory>(self.db, query).await?;

        Ok((self.expand(categories).await?, total))
    }

    /// Gets a category with all of its products.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<CategoryDetail>, DbErr> {
        let category = entity::prelude::ProductCategory::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(self.expand(category.into_iter().collect()).await?.pop())
    }

    pub async fn update(
        &self,
        id: i32,
        params: UpdateCategoryParams,
    ) -> Result<Option<CategoryDetail>, DbErr> {
        let Some(category) = entity::prelude::ProductCategory::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active = category.into_active_model();
        if let Some(category_name) = params.category_name {
            active.category_name = ActiveValue::Set(category_name);
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        let category = active.update(self.db).await?;

        Ok(self.expand(vec![category]).await?.pop())
    }

    /// Deletes a category and, through the cascade, its products.
    pub async fn delete(&self, id: i32) -> Result<Option<Category>, DbErr> {
        let Some(category) = entity::prelude::ProductCategory::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        category.clone().delete(self.db).await?;

        Ok(Some(Category::from_entity(category)))
    }

    /// Loads the products of every category with one query.
    async fn expand(
        &self,
        categories: Vec<entity::product_category::Model>,
    ) -> Result<Vec<CategoryDetail>, DbErr> {
        if categories.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<i32> = categories.iter().map(|c| c.id).collect();

        let mut products: HashMap<i32, Vec<Product>> = HashMap::new();
        for product in entity::prelude::Product::find()
            .filter(entity::product::Column::CategoryId.is_in(ids))
            .all(self.db)
            .await?
        {
            products
                .entry(product.category_id)
                .or_default()
                .push(Product::from_entity(product));
        }

        Ok(categories
            .into_iter()
            .map(|category| CategoryDetail {
                products: products.remove(&category.id).unwrap_or_default(),
                category: Category::from_entity(category),
            })
            .collect())
    }
}
