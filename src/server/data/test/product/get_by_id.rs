use super::*;

/// Tests loading a product with every relation.
///
/// Expected: Ok(Some) with category, owner, winner, bids (highest first) and messages
#[tokio::test]
async fn loads_product_relations() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, category, product) =
        factory::helpers::create_product_with_dependencies(db).await?;
    let bidder = factory::create_user(db).await?;
    factory::create_bid(db, product.id, bidder.id, 110).await?;
    factory::create_bid(db, product.id, bidder.id, 120).await?;
    factory::create_message(db, product.id, bidder.id, "Ships abroad?").await?;
    factory::create_auction_winner(db, product.id, bidder.id).await?;

    let repo = ProductRepository::new(db);
    let detail = repo.get_by_id(product.id).await?.unwrap();

    assert_eq!(detail.category.unwrap().id, category.id);
    assert_eq!(detail.owner.unwrap().id, owner.id);
    assert_eq!(detail.auction_winner.unwrap().auction_winner_id, bidder.id);
    let amounts: Vec<i64> = detail.bids.iter().map(|b| b.amount).collect();
    assert_eq!(amounts, vec![120, 110]);
    assert_eq!(detail.messages[0].content, "Ships abroad?");

    Ok(())
}

/// Tests loading a product without bids or a winner.
///
/// Expected: Ok(Some) with empty relations
#[tokio::test]
async fn loads_product_without_activity() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, product) = factory::helpers::create_product_with_dependencies(db).await?;

    let repo = ProductRepository::new(db);
    let detail = repo.get_by_id(product.id).await?.unwrap();

    assert!(detail.auction_winner.is_none());
    assert!(detail.bids.is_empty());
    assert!(detail.messages.is_empty());

    Ok(())
}
