pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_user_table;
mod m20240101_000002_create_product_category_table;
mod m20240101_000003_create_product_table;
mod m20240101_000004_create_auction_bidding_history_table;
mod m20240101_000005_create_auction_winner_table;
mod m20240101_000006_create_payment_table;
mod m20240101_000007_create_product_message_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_user_table::Migration),
            Box::new(m20240101_000002_create_product_category_table::Migration),
            Box::new(m20240101_000003_create_product_table::Migration),
            Box::new(m20240101_000004_create_auction_bidding_history_table::Migration),
            Box::new(m20240101_000005_create_auction_winner_table::Migration),
            Box::new(m20240101_000006_create_payment_table::Migration),
            Box::new(m20240101_000007_create_product_message_table::Migration),
        ]
    }
}
