//! Product category factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct CategoryFactory<'a> {
    db: &'a DatabaseConnection,
    category_name: String,
}

impl<'a> CategoryFactory<'a> {
    /// Creates a new CategoryFactory named `"Category {id}"`.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            category_name: format!("Category {}", next_id()),
        }
    }

    pub fn category_name(mut self, category_name: impl Into<String>) -> Self {
        self.category_name = category_name.into();
        self
    }

    pub async fn build(self) -> Result<entity::product_category::Model, DbErr> {
        let now = Utc::now();
        entity::product_category::ActiveModel {
            category_name: ActiveValue::Set(self.category_name),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a category with a unique default name.
pub async fn create_category(
    db: &DatabaseConnection,
) -> Result<entity::product_category::Model, DbErr> {
    CategoryFactory::new(db).build().await
}
