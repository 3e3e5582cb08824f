use std::collections::HashMap;

use chrono::Utc;
use entity::product::Column;
use sea_orm::{
    sea_query::{Query, SelectStatement},
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, ModelTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    data::find_page,
    model::{
        auction_winner::AuctionWinner,
        bid::Bid,
        category::Category,
        message::Message,
        product::{CreateProductParams, Product, ProductDetail, UpdateProductParams},
        user::User,
    },
    query::{
        filter::{Field, FieldKind, QuerySpec, Relational},
        ListQuery,
    },
};

fn category_subquery(id: i64) -> SelectStatement {
    Query::select()
        .column(entity::product_category::Column::Id)
        .from(entity::prelude::ProductCategory)
        .and_where(entity::product_category::Column::Id.eq(id))
        .to_owned()
}

pub static PRODUCT_QUERY: QuerySpec<Column> = QuerySpec {
    searchable: &[Column::ProductName],
    filterable: &[
        Field::new(
            "auctionStatus",
            Column::AuctionStatus,
            FieldKind::Enum(&["not_started", "ongoing", "end"]),
        ),
        Field::new("productOwnerId", Column::ProductOwnerId, FieldKind::Integer),
    ],
    relational: &[Relational {
        name: "categoryId",
        column: Column::CategoryId,
        subquery: category_subquery,
    }],
    price: Some(Column::CurrentBiddingPrice),
    sortable: &[
        ("productName", Column::ProductName),
        ("currentBiddingPrice", Column::CurrentBiddingPrice),
        ("auctionDate", Column::AuctionDate),
        ("createdAt", Column::CreatedAt),
        ("updatedAt", Column::UpdatedAt),
        ("id", Column::Id),
    ],
    default_sort: Column::CreatedAt,
};

pub struct ProductRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProductRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a product and returns it with relations expanded.
    pub async fn create(&self, params: CreateProductParams) -> Result<ProductDetail, DbErr> {
        let now = Utc::now();
        let product = entity::product::ActiveModel {
            product_name: ActiveValue::Set(params.product_name),
            description: ActiveValue::Set(params.description),
            image_url: ActiveValue::Set(params.image_url),
            auction_date: ActiveValue::Set(params.auction_date),
            auction_time: ActiveValue::Set(params.auction_time),
            auction_status: ActiveValue::Set(params.auction_status),
            initial_bidding_price: ActiveValue::Set(params.initial_bidding_price),
            current_bidding_price: ActiveValue::Set(params.current_bidding_price),
            increment_amount: ActiveValue::Set(params.increment_amount),
            category_id: ActiveValue::Set(params.category_id),
            product_owner_id: ActiveValue::Set(params.product_owner_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        self.expand_one(product).await
    }

    pub async fn get_all(
        &self,
        query: &ListQuery<Column>,
    ) -> Result<(Vec<ProductDetail>, u64), DbErr> {
        let (products, total) = find_page::<entity::prelude::Product>(self.db, query).await?;

        Ok((self.expand(products).await?, total))
    }

    /// Gets a product with category, owner, winner, bidding history and messages.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<ProductDetail>, DbErr> {
        let Some(product) = entity::prelude::Product::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        Ok(Some(self.expand_one(product).await?))
    }

    /// Gets every product of a category with relations expanded, newest first.
    pub async fn get_by_category(&self, category_id: i32) -> Result<Vec<ProductDetail>, DbErr> {
        let products = entity::prelude::Product::find()
            .filter(Column::CategoryId.eq(category_id))
            .order_by_desc(Column::CreatedAt)
            .all(self.db)
            .await?;

        self.expand(products).await
    }

    /// Applies a partial update. Returns `None` if the product does not exist.
    pub async fn update(
        &self,
        id: i32,
        params: UpdateProductParams,
    ) -> Result<Option<ProductDetail>, DbErr> {
        let Some(product) = entity::prelude::Product::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active = product.into_active_model();
        if let Some(product_name) = params.product_name {
            active.product_name = ActiveValue::Set(product_name);
        }
        if let Some(description) = params.description {
            active.description = ActiveValue::Set(description);
        }
        if let Some(image_url) = params.image_url {
            active.image_url = ActiveValue::Set(image_url);
        }
        if let Some(auction_date) = params.auction_date {
            active.auction_date = ActiveValue::Set(auction_date);
        }
        if let Some(auction_time) = params.auction_time {
            active.auction_time = ActiveValue::Set(auction_time);
        }
        if let Some(auction_status) = params.auction_status {
            active.auction_status = ActiveValue::Set(auction_status);
        }
        if let Some(initial_bidding_price) = params.initial_bidding_price {
            active.initial_bidding_price = ActiveValue::Set(initial_bidding_price);
        }
        if let Some(current_bidding_price) = params.current_bidding_price {
            active.current_bidding_price = ActiveValue::Set(current_bidding_price);
        }
        if let Some(increment_amount) = params.increment_amount {
            active.increment_amount = ActiveValue::Set(increment_amount);
        }
        if let Some(category_id) = params.category_id {
            active.category_id = ActiveValue::Set(category_id);
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        let product = active.update(self.db).await?;

        Ok(Some(self.expand_one(product).await?))
    }

    /// Deletes a product together with its bids, winner and messages.
    ///
    /// The returned detail is the state just before the delete.
    pub async fn delete(&self, id: i32) -> Result<Option<ProductDetail>, DbErr> {
        let Some(product) = entity::prelude::Product::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let detail = self.expand_one(product.clone()).await?;
        product.delete(self.db).await?;

        Ok(Some(detail))
    }

    async fn expand_one(&self, product: entity::product::Model) -> Result<ProductDetail, DbErr> {
        self.expand(vec![product])
            .await?
            .pop()
            .ok_or_else(|| DbErr::RecordNotFound("product relations".to_string()))
    }

    /// Loads the relations of every product with one query per relation.
    ///
    /// Bidding history is ordered by amount, highest first.
    async fn expand(
        &self,
        products: Vec<entity::product::Model>,
    ) -> Result<Vec<ProductDetail>, DbErr> {
        if products.is_empty() {
            return Ok(Vec::new());
        }

        let product_ids: Vec<i32> = products.iter().map(|p| p.id).collect();
        let owner_ids: Vec<i32> = products.iter().map(|p| p.product_owner_id).collect();
        let category_ids: Vec<i32> = products.iter().map(|p| p.category_id).collect();

        let categories: HashMap<i32, Category> = entity::prelude::ProductCategory::find()
            .filter(entity::product_category::Column::Id.is_in(category_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|c| (c.id, Category::from_entity(c)))
            .collect();

        let owners: HashMap<i32, User> = entity::prelude::User::find()
            .filter(entity::user::Column::Id.is_in(owner_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|u| (u.id, User::from_entity(u)))
            .collect();

        let winners: HashMap<i32, AuctionWinner> = entity::prelude::AuctionWinner::find()
            .filter(entity::auction_winner::Column::ProductId.is_in(product_ids.clone()))
            .all(self.db)
            .await?
            .into_iter()
            .map(|w| (w.product_id, AuctionWinner::from_entity(w)))
            .collect();

        let mut bids: HashMap<i32, Vec<Bid>> = HashMap::new();
        for bid in entity::prelude::AuctionBiddingHistory::find()
            .filter(entity::auction_bidding_history::Column::ProductId.is_in(product_ids.clone()))
            .order_by_desc(entity::auction_bidding_history::Column::Amount)
            .all(self.db)
            .await?
        {
            bids.entry(bid.product_id)
                .or_default()
                .push(Bid::from_entity(bid));
        }

        let mut messages: HashMap<i32, Vec<Message>> = HashMap::new();
        for message in entity::prelude::ProductMessage::find()
            .filter(entity::product_message::Column::ProductId.is_in(product_ids))
            .all(self.db)
            .await?
        {
            messages
                .entry(message.product_id)
                .or_default()
                .push(Message::from_entity(message));
        }

        Ok(products
            .into_iter()
            .map(|product| ProductDetail {
                category: categories.get(&product.category_id).cloned(),
                owner: owners.get(&product.product_owner_id).cloned(),
                auction_winner: winners.get(&product.id).cloned(),
                bids: bids.remove(&product.id).unwrap_or_default(),
                messages: messages.remove(&product.id).unwrap_or_default(),
                product: Product::from_entity(product),
            })
            .collect())
    }
}
