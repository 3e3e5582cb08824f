use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Add entity tables in dependency order, then call `build()` to create the in-memory
/// database with those tables.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{User, ProductCategory};
///
/// let test = TestBuilder::new()
///     .with_table(User)
///     .with_table(ProductCategory)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Tables with foreign keys must be added after the tables they reference.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity to create the table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the tables required for product operations.
    ///
    /// Adds, in dependency order:
    /// - User
    /// - ProductCategory
    /// - Product
    pub fn with_product_tables(self) -> Self {
        self.with_table(User)
            .with_table(ProductCategory)
            .with_table(Product)
    }

    /// Adds every marketplace table in dependency order.
    ///
    /// Use this for service and controller tests that touch bids, winners, payments or
    /// messages alongside products.
    pub fn with_marketplace_tables(self) -> Self {
        self.with_product_tables()
            .with_table(AuctionBiddingHistory)
            .with_table(AuctionWinner)
            .with_table(Payment)
            .with_table(ProductMessage)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Initialized test context with tables ready
    /// - `Err(TestError::Database)` - Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
