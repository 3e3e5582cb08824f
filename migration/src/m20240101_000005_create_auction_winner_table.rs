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
                    .table(AuctionWinner::Table)
                    .if_not_exists()
                    .col(pk_auto(AuctionWinner::Id))
                    .col(integer_uniq(AuctionWinner::ProductId))
                    .col(integer(AuctionWinner::AuctionWinnerId))
                    .col(
                        timestamp_with_time_zone(AuctionWinner::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(AuctionWinner::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_auction_winner_product_id")
                            .from(AuctionWinner::Table, AuctionWinner::ProductId)
                            .to(Product::Table, Product::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_auction_winner_user_id")
                            .from(AuctionWinner::Table, AuctionWinner::AuctionWinnerId)
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
            .drop_table(Table::drop().table(AuctionWinner::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum AuctionWinner {
    Table,
    Id,
    ProductId,
    AuctionWinnerId,
    CreatedAt,
    UpdatedAt,
}
