use super::*;

/// Tests loading a user with owned products, winnings, messages and bids.
///
/// Expected: Ok(Some) with every relation populated
#[tokio::test]
async fn loads_user_relations() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, _category, product) =
        factory::helpers::create_product_with_dependencies(db).await?;
    factory::create_bid(db, product.id, owner.id, 110).await?;
    factory::create_message(db, product.id, owner.id, "Is it still available?").await?;
    factory::create_auction_winner(db, product.id, owner.id).await?;

    let repo = UserRepository::new(db);
    let detail = repo.get_by_id(owner.id).await?.unwrap();

    assert_eq!(detail.user.id, owner.id);
    assert_eq!(detail.products.len(), 1);
    assert_eq!(detail.winnings.len(), 1);
    assert_eq!(detail.messages.len(), 1);
    assert_eq!(detail.bids[0].amount, 110);

    Ok(())
}

/// Tests loading a user that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let result = repo.get_by_id(9999).await?;

    assert!(result.is_none());

    Ok(())
}
