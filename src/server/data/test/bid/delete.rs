use super::*;

/// Tests deleting a bid.
///
/// Expected: Ok(Some) with the removed bid, then Ok(None) on a second attempt
#[tokio::test]
async fn deletes_bid_once() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, _, product) = factory::helpers::create_product_with_dependencies(db).await?;
    let bid = factory::create_bid(db, product.id, owner.id, 110).await?;

    let repo = BidRepository::new(db);

    assert_eq!(repo.delete(bid.id).await?.unwrap().id, bid.id);
    assert!(repo.delete(bid.id).await?.is_none());

    Ok(())
}
