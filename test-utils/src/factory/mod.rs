//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let user = factory::user::create_user(&db).await?;
//!     let (owner, category, product) =
//!         factory::helpers::create_product_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let product = factory::product::ProductFactory::new(&db, category.id, owner.id)
//!     .current_bidding_price(100)
//!     .increment_amount(10)
//!     .build()
//!     .await?;
//! ```

pub mod auction_winner;
pub mod bid;
pub mod category;
pub mod helpers;
pub mod message;
pub mod payment;
pub mod product;
pub mod user;

pub use auction_winner::create_auction_winner;
pub use bid::create_bid;
pub use category::create_category;
pub use message::create_message;
pub use payment::create_payment;
pub use product::create_product;
pub use user::{create_admin, create_user};
