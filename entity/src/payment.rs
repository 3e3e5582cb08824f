use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "payment")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub auction_winner_id: i32,
    pub amount: i64,
    pub transaction_id: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::auction_winner::Entity",
        from = "Column::AuctionWinnerId",
        to = "super::auction_winner::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    AuctionWinner,
}

impl Related<super::auction_winner::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AuctionWinner.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
