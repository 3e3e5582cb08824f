use super::*;

/// Tests deleting a product with bids.
///
/// Expected: Ok(Some) carrying the bids it had, and its bidding history removed by the
/// cascade
#[tokio::test]
async fn deletes_product_and_bids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, _, product) = factory::helpers::create_product_with_dependencies(db).await?;
    factory::create_bid(db, product.id, owner.id, 110).await?;

    let repo = ProductRepository::new(db);
    let deleted = repo.delete(product.id).await?.unwrap();

    assert_eq!(deleted.product.id, product.id);
    assert_eq!(deleted.bids.len(), 1);
    assert_eq!(entity::prelude::Product::find().count(db).await?, 0);
    assert_eq!(
        entity::prelude::AuctionBiddingHistory::find()
            .count(db)
            .await?,
        0
    );

    Ok(())
}

/// Tests deleting a product that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_product() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ProductRepository::new(db);

    assert!(repo.delete(404).await?.is_none());

    Ok(())
}
