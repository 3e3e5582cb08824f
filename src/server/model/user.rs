//! User domain models and parameters.
//!
//! The password hash never leaves this layer inside a `User`; sign-in reads it through
//! `UserCredentials` instead.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::{Gender, UserRole};

use crate::{
    model::user::{CreateUserDto, GenderDto, RoleDto, UpdateUserDto, UserDetailDto, UserDto},
    server::model::{auction_winner::AuctionWinner, bid::Bid, message::Message, product::Product},
};

impl From<UserRole> for RoleDto {
    fn from(role: UserRole) -> Self {
        match role {
            UserRole::Admin => RoleDto::Admin,
            UserRole::User => RoleDto::User,
        }
    }
}

impl From<RoleDto> for UserRole {
    fn from(role: RoleDto) -> Self {
        match role {
            RoleDto::Admin => UserRole::Admin,
            RoleDto::User => UserRole::User,
        }
    }
}

impl From<Gender> for GenderDto {
    fn from(gender: Gender) -> Self {
        match gender {
            Gender::Male => GenderDto::Male,
            Gender::Female => GenderDto::Female,
            Gender::Others => GenderDto::Others,
        }
    }
}

impl From<GenderDto> for Gender {
    fn from(gender: GenderDto) -> Self {
        match gender {
            GenderDto::Male => Gender::Male,
            GenderDto::Female => Gender::Female,
            GenderDto::Others => Gender::Others,
        }
    }
}

/// Marketplace account without its password hash.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub full_name: String,
    pub email: String,
    pub role: UserRole,
    pub contact_number: String,
    pub address: String,
    pub image_url: Option<String>,
    pub gender: Gender,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Converts an entity model to a domain model at the repository boundary, dropping the
    /// password hash.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            full_name: entity.full_name,
            email: entity.email,
            role: entity.role,
            contact_number: entity.contact_number,
            address: entity.address,
            image_url: entity.image_url,
            gender: entity.gender,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            full_name: self.full_name,
            email: self.email,
            role: self.role.into(),
            contact_number: self.contact_number,
            address: self.address,
            image_url: self.image_url,
            gender: self.gender.into(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// User together with the stored bcrypt hash, used only by sign-in.
#[derive(Debug, Clone)]
pub struct UserCredentials {
    pub user: User,
    pub password_hash: String,
}

impl UserCredentials {
    pub fn from_entity(entity: entity::user::Model) -> Self {
        let password_hash = entity.password.clone();
        Self {
            user: User::from_entity(entity),
            password_hash,
        }
    }
}

/// User with owned products, won auctions, sent messages and placed bids.
#[derive(Debug, Clone)]
pub struct UserDetail {
    pub user: User,
    pub products: Vec<Product>,
    pub winnings: Vec<AuctionWinner>,
    pub messages: Vec<Message>,
    pub bids: Vec<Bid>,
}

impl UserDetail {
    pub fn into_dto(self) -> UserDetailDto {
        UserDetailDto {
            user: self.user.into_dto(),
            user_products: self.products.into_iter().map(Product::into_dto).collect(),
            winning_products: self
                .winnings
                .into_iter()
                .map(AuctionWinner::into_dto)
                .collect(),
            messages: self.messages.into_iter().map(Message::into_dto).collect(),
            auction_bidding_history: self.bids.into_iter().map(Bid::into_dto).collect(),
        }
    }
}

/// Parameters for creating a user.
///
/// `password` holds the plaintext until the service replaces it with the hash.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub role: UserRole,
    pub contact_number: String,
    pub address: String,
    pub image_url: Option<String>,
    pub gender: Gender,
}

impl CreateUserParams {
    /// Signups without an explicit role become regular users.
    pub fn from_dto(dto: CreateUserDto) -> Self {
        Self {
            full_name: dto.full_name,
            email: dto.email,
            password: dto.password,
            role: dto.role.map(Into::into).unwrap_or(UserRole::User),
            contact_number: dto.contact_number,
            address: dto.address,
            image_url: dto.image_url,
            gender: dto.gender.into(),
        }
    }
}

/// Partial user update. `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateUserParams {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub role: Option<UserRole>,
    pub contact_number: Option<String>,
    pub address: Option<String>,
    pub image_url: Option<String>,
    pub gender: Option<Gender>,
}

impl UpdateUserParams {
    pub fn from_dto(dto: UpdateUserDto) -> Self {
        Self {
            full_name: dto.full_name,
            email: dto.email,
            password: dto.password,
            role: dto.role.map(Into::into),
            contact_number: dto.contact_number,
            address: dto.address,
            image_url: dto.image_url,
            gender: dto.gender.map(Into::into),
        }
    }
}
