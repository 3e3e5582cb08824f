use chrono::Utc;
use entity::user::Column;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, ModelTrait, QueryFilter,
};

use crate::server::{
    data::find_page,
    model::{
        auction_winner::AuctionWinner,
        bid::Bid,
        message::Message,
        product::Product,
        user::{CreateUserParams, UpdateUserParams, User, UserCredentials, UserDetail},
    },
    query::{
        filter::{Field, FieldKind, QuerySpec},
        ListQuery,
    },
};

pub static USER_QUERY: QuerySpec<Column> = QuerySpec {
    searchable: &[Column::FullName, Column::Address],
    filterable: &[
        Field::new("fullName", Column::FullName, FieldKind::Text),
        Field::new("email", Column::Email, FieldKind::Text),
        Field::new("role", Column::Role, FieldKind::Enum(&["admin", "user"])),
        Field::new(
            "gender",
            Column::Gender,
            FieldKind::Enum(&["male", "female", "others"]),
        ),
    ],
    relational: &[],
    price: None,
    sortable: &[
        ("fullName", Column::FullName),
        ("email", Column::Email),
        ("createdAt", Column::CreatedAt),
        ("updatedAt", Column::UpdatedAt),
        ("id", Column::Id),
    ],
    default_sort: Column::CreatedAt,
};

pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a user. `params.password` must already be hashed.
    pub async fn create(&self, params: CreateUserParams) -> Result<User, DbErr> {
        let now = Utc::now();
        let user = entity::user::ActiveModel {
            full_name: ActiveValue::Set(params.full_name),
            email: ActiveValue::Set(params.email),
            password: ActiveValue::Set(params.password),
            role: ActiveValue::Set(params.role),
            contact_number: ActiveValue::Set(params.contact_number),
            address: ActiveValue::Set(params.address),
            image_url: ActiveValue::Set(params.image_url),
            gender: ActiveValue::Set(params.gender),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(user))
    }

    pub async fn get_all(&self, query: &ListQuery<Column>) -> Result<(Vec<User>, u64), DbErr> {
        let (users, total) = find_page::<entity::prelude::User>(self.db, query).await?;

        Ok((users.into_iter().map(User::from_entity).collect(), total))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, DbErr> {
        let user = entity::prelude::User::find_by_id(id).one(self.db).await?;

        Ok(user.map(User::from_entity))
    }

    /// Finds a user together with the stored password hash.
    pub async fn find_credentials_by_email(
        &self,
        email: &str,
    ) -> Result<Option<UserCredentials>, DbErr> {
        let user = entity::prelude::User::find()
            .filter(Column::Email.eq(email))
            .one(self.db)
            .await?;

        Ok(user.map(UserCredentials::from_entity))
    }

    /// Gets a user with owned products, winnings, messages and bids.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<UserDetail>, DbErr> {
        let Some(user) = entity::prelude::User::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let products = user
            .find_related(entity::prelude::Product)
            .all(self.db)
            .await?;
        let winnings = user
            .find_related(entity::prelude::AuctionWinner)
            .all(self.db)
            .await?;
        let messages = user
            .find_related(entity::prelude::ProductMessage)
            .all(self.db)
            .await?;
        let bids = user
            .find_related(entity::prelude::AuctionBiddingHistory)
            .all(self.db)
            .await?;

        Ok(Some(UserDetail {
            user: User::from_entity(user),
            products: products.into_iter().map(Product::from_entity).collect(),
            winnings: winnings
                .into_iter()
                .map(AuctionWinner::from_entity)
                .collect(),
            messages: messages.into_iter().map(Message::from_entity).collect(),
            bids: bids.into_iter().map(Bid::from_entity).collect(),
        }))
    }

    /// Applies a partial update. `params.password`, when present, must already be hashed.
    ///
    /// Returns `None` if the user does not exist.
    pub async fn update(&self, id: i32, params: UpdateUserParams) -> Result<Option<User>, DbErr> {
        let Some(user) = entity::prelude::User::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active = user.into_active_model();
        if let Some(full_name) = params.full_name {
            active.full_name = ActiveValue::Set(full_name);
        }
        if let Some(email) = params.email {
            active.email = ActiveValue::Set(email);
        }
        if let Some(password) = params.password {
            active.password = ActiveValue::Set(password);
        }
        if let Some(role) = params.role {
            active.role = ActiveValue::Set(role);
        }
        if let Some(contact_number) = params.contact_number {
            active.contact_number = ActiveValue::Set(contact_number);
        }
        if let Some(address) = params.address {
            active.address = ActiveValue::Set(address);
        }
        if let Some(image_url) = params.image_url {
            active.image_url = ActiveValue::Set(Some(image_url));
        }
        if let Some(gender) = params.gender {
            active.gender = ActiveValue::Set(gender);
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        let user = active.update(self.db).await?;

        Ok(Some(User::from_entity(user)))
    }

    /// Deletes a user, returning the removed record or `None` if it did not exist.
    pub async fn delete(&self, id: i32) -> Result<Option<User>, DbErr> {
        let Some(user) = entity::prelude::User::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        user.clone().delete(self.db).await?;

        Ok(Some(User::from_entity(user)))
    }
}
