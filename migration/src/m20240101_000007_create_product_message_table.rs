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
                    .table(ProductMessage::Table)
                    .if_not_exists()
                    .col(pk_auto(ProductMessage::Id))
                    .col(text(ProductMessage::Content))
                    .col(integer(ProductMessage::ProductId))
                    .col(integer(ProductMessage::SenderId))
                    .col(
                        timestamp_with_time_zone(ProductMessage::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(ProductMessage::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_product_message_product_id")
                            .from(ProductMessage::Table, ProductMessage::ProductId)
                            .to(Product::Table, Product::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_product_message_sender_id")
                            .from(ProductMessage::Table, ProductMessage::SenderId)
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
            .drop_table(Table::drop().table(ProductMessage::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ProductMessage {
    Table,
    Id,
    Content,
    ProductId,
    SenderId,
    CreatedAt,
    UpdatedAt,
}
