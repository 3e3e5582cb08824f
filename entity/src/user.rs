use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::{Gender, UserRole};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub full_name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub password: String,
    pub role: UserRole,
    pub contact_number: String,
    pub address: String,
    pub image_url: Option<String>,
    pub gender: Gender,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::product::Entity")]
    Product,
    #[sea_orm(has_many = "super::auction_winner::Entity")]
    AuctionWinner,
    #[sea_orm(has_many = "super::product_message::Entity")]
    ProductMessage,
    #[sea_orm(has_many = "super::auction_bidding_history::Entity")]
    AuctionBiddingHistory,
}

impl Related<super::product::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Product.def()
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

impl Related<super::auction_bidding_history::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AuctionBiddingHistory.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
