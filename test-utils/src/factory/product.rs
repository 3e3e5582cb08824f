//! Product factory for creating auction items.

use crate::factory::helpers::next_id;
use chrono::{NaiveDate, NaiveTime, Utc};
use entity::sea_orm_active_enums::AuctionStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test products.
///
/// Requires an existing category and owner since both are foreign keys.
pub struct ProductFactory<'a> {
    db: &'a DatabaseConnection,
    product_name: String,
    category_id: i32,
    product_owner_id: i32,
    auction_status: AuctionStatus,
    initial_bidding_price: i64,
    current_bidding_price: i64,
    increment_amount: i64,
}

impl<'a> ProductFactory<'a> {
    /// Creates a new ProductFactory with default values.
    ///
    /// Defaults:
    /// - product_name: `"Product {id}"`
    /// - auction_status: `AuctionStatus::NotStarted`
    /// - initial and current bidding price: `100`
    /// - increment_amount: `10`
    pub fn new(db: &'a DatabaseConnection, category_id: i32, product_owner_id: i32) -> Self {
        Self {
            db,
            product_name: format!("Product {}", next_id()),
            category_id,
            product_owner_id,
            auction_status: AuctionStatus::NotStarted,
            initial_bidding_price: 100,
            current_bidding_price: 100,
            increment_amount: 10,
        }
    }

    pub fn product_name(mut self, product_name: impl Into<String>) -> Self {
        self.product_name = product_name.into();
        self
    }

    pub fn auction_status(mut self, auction_status: AuctionStatus) -> Self {
        self.auction_status = auction_status;
        self
    }

    /// Sets both the initial and the current bidding price.
    pub fn price(mut self, price: i64) -> Self {
        self.initial_bidding_price = price;
        self.current_bidding_price = price;
        self
    }

    pub fn current_bidding_price(mut self, price: i64) -> Self {
        self.current_bidding_price = price;
        self
    }

    pub fn increment_amount(mut self, increment_amount: i64) -> Self {
        self.increment_amount = increment_amount;
        self
    }

    pub async fn build(self) -> Result<entity::product::Model, DbErr> {
        let now = Utc::now();
        entity::product::ActiveModel {
            product_name: ActiveValue::Set(self.product_name),
            description: ActiveValue::Set("A test auction item".to_string()),
            image_url: ActiveValue::Set("https://example.com/item.png".to_string()),
            auction_date: ActiveValue::Set(
                NaiveDate::from_ymd_opt(2030, 1, 1).unwrap_or_default(),
            ),
            auction_time: ActiveValue::Set(NaiveTime::from_hms_opt(12, 0, 0).unwrap_or_default()),
            auction_status: ActiveValue::Set(self.auction_status),
            initial_bidding_price: ActiveValue::Set(self.initial_bidding_price),
            current_bidding_price: ActiveValue::Set(self.current_bidding_price),
            increment_amount: ActiveValue::Set(self.increment_amount),
            category_id: ActiveValue::Set(self.category_id),
            product_owner_id: ActiveValue::Set(self.product_owner_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a product with default values for the given category and owner.
pub async fn create_product(
    db: &DatabaseConnection,
    category_id: i32,
    product_owner_id: i32,
) -> Result<entity::product::Model, DbErr> {
    ProductFactory::new(db, category_id, product_owner_id)
        .build()
        .await
}
