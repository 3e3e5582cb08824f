use entity::sea_orm_active_enums::{AuctionStatus, Gender, UserRole};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    error::{auth::AuthError, AppError},
    model::{
        bid::PlaceBidParams,
        user::{CreateUserParams, UpdateUserParams},
    },
    realtime::{EventPublisher, PublishError, RealtimeEvent, RealtimeHub, Topic},
    service::{
        auth::AuthService, bid::BidService, product::ProductService, user::UserService,
    },
    util::{password::PasswordHasher, token::TokenService},
};


/// Lowest bcrypt cost, keeps hashing fast in tests.
fn hasher() -> PasswordHasher {
    PasswordHasher::new(4)
}

fn tokens() -> TokenService {
    TokenService::new("access-secret", "refresh-secret", 3600, 7200)
}

fn signup_params(email: &str, password: &str) -> CreateUserParams {
    CreateUserParams {
        full_name: "Test Bidder".to_string(),
        email: email.to_string(),
        password: password.to_string(),
        role: UserRole::User,
        contact_number: "01700000000".to_string(),
        address: "Dhaka".to_string(),
        image_url: None,
        gender: Gender::Female,
    }
}
