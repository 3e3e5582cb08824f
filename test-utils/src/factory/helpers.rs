//! Shared helper utilities for factory methods.

use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a product together with its owner and category.
///
/// # Returns
/// - `Ok((owner, category, product))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_product_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::product_category::Model,
        entity::product::Model,
    ),
    DbErr,
> {
    let owner = crate::factory::user::create_admin(db).await?;
    let category = crate::factory::category::create_category(db).await?;
    let product = crate::factory::product::create_product(db, category.id, owner.id).await?;

    Ok((owner, category, product))
}

/// Creates a product, a bidder and an auction winner record linking the two.
///
/// # Returns
/// - `Ok((product, winner_user, auction_winner))`
/// - `Err(DbErr)` - Database error during creation
pub async fn create_auction_winner_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::product::Model,
        entity::user::Model,
        entity::auction_winner::Model,
    ),
    DbErr,
> {
    let (_, _, product) = create_product_with_dependencies(db).await?;
    let bidder = crate::factory::user::create_user(db).await?;
    let winner =
        crate::factory::auction_winner::create_auction_winner(db, product.id, bidder.id).await?;

    Ok((product, bidder, winner))
}

/// Installs a trigger that silently discards every change to a product's bidding price.
///
/// Any compare-and-swap on `current_bidding_price` then affects zero rows, the same
/// outcome as losing the race to a concurrent bid.
pub async fn hold_product_price(db: &DatabaseConnection) -> Result<(), DbErr> {
    db.execute_unprepared(
        "CREATE TRIGGER hold_product_price BEFORE UPDATE OF current_bidding_price ON product \
         BEGIN SELECT RAISE(IGNORE); END;",
    )
    .await?;

    Ok(())
}
