use super::*;

/// Tests loading a bid with its product and bidder.
///
/// Expected: Ok(Some) with both relations
#[tokio::test]
async fn loads_bid_relations() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, product) = factory::helpers::create_product_with_dependencies(db).await?;
    let bidder = factory::create_user(db).await?;
    let bid = factory::create_bid(db, product.id, bidder.id, 110).await?;

    let repo = BidRepository::new(db);
    let detail = repo.get_by_id(bid.id).await?.unwrap();

    assert_eq!(detail.bid.amount, 110);
    assert_eq!(detail.product.unwrap().id, product.id);
    assert_eq!(detail.bidder.unwrap().id, bidder.id);

    Ok(())
}
