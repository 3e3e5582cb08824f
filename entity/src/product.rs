use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::AuctionStatus;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "product")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub product_name: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub image_url: String,
    pub auction_date: Date,
    pub auction_time: Time,
    pub auction_status: AuctionStatus,
    pub initial_bidding_price: i64,
    pub current_bidding_price: i64,
    pub increment_amount: i64,
    pub category_id: i32,
    pub product_owner_id: i32,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::product_category::Entity",
        from = "Column::CategoryId",
        to = "super::product_category::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    ProductCategory,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::ProductOwnerId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
    #[sea_orm(has_many = "super::auction_bidding_history::Entity")]
    AuctionBiddingHistory,
    #[sea_orm(has_one = "super::auction_winner::Entity")]
    AuctionWinner,
    #[sea_orm(has_many = "super::product_message::Entity")]
    ProductMessage,
}

impl Related<super::product_category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProductCategory.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::auction_bidding_history::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AuctionBiddingHistory.def()
    }
}

impl Related<super::auction_winner::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AuctionWinner.def()
    }
}

impl Related<super::product_message::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProductMessage.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
