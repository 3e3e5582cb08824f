use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20240101_000001_create_user_table::User,
    m20240101_000002_create_product_category_table::ProductCategory,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Product::Table)
                    .if_not_exists()
                    .col(pk_auto(Product::Id))
                    .col(string(Product::ProductName))
                    .col(text(Product::Description))
                    .col(string(Product::ImageUrl))
                    .col(date(Product::AuctionDate))
                    .col(time(Product::AuctionTime))
                    .col(string_len(Product::AuctionStatus, 16).default("not_started"))
                    .col(big_integer(Product::InitialBiddingPrice))
                    .col(big_integer(Product::CurrentBiddingPrice))
                    .col(big_integer(Product::IncrementAmount))
                    .col(integer(Product::CategoryId))
                    .col(integer(Product::ProductOwnerId))
                    .col(
                        timestamp_with_time_zone(Product::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(Product::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_product_category_id")
                            .from(Product::Table, Product::CategoryId)
                            .to(ProductCategory::Table, ProductCategory::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_product_owner_id")
                            .from(Product::Table, Product::ProductOwnerId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Product::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Product {
    Table,
    Id,
    ProductName,
    Description,
    ImageUrl,
    AuctionDate,
    AuctionTime,
    AuctionStatus,
    InitialBiddingPrice,
    CurrentBiddingPrice,
    IncrementAmount,
    CategoryId,
    ProductOwnerId,
    CreatedAt,
    UpdatedAt,
}
