use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20240101_000001_create_user_table::User, m20240101_000003_create_product_table::Product,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AuctionBiddingHistory::Table)
                    .if_not_exists()
                    .col(pk_auto(AuctionBiddingHistory::Id))
                    .col(integer(AuctionBiddingHistory::ProductId))
                    .col(integer(AuctionBiddingHistory::BidderId))
                    .col(big_integer(AuctionBiddingHistory::Amount))
                    .col(
                        timestamp_with_time_zone(AuctionBiddingHistory::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(AuctionBiddingHistory::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_abh_product_id")
                            .from(AuctionBiddingHistory::Table, AuctionBiddingHistory::ProductId)
                            .to(Product::Table, Product::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_abh_bidder_id")
                            .from(AuctionBiddingHistory::Table, AuctionBiddingHistory::BidderId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_abh_product_id")
                    .table(AuctionBiddingHistory::Table)
                    .col(AuctionBiddingHistory::ProductId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AuctionBiddingHistory::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum AuctionBiddingHistory {
    Table,
    Id,
    ProductId,
    BidderId,
    Amount,
    CreatedAt,
    UpdatedAt,
}
