use super::*;

/// Tests correcting a bid amount.
///
/// Expected: Ok(Some) with the new amount and relations, and the product price unchanged
#[tokio::test]
async fn corrects_amount_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, _, product) = factory::helpers::create_product_with_dependencies(db).await?;
    let bid = factory::create_bid(db, product.id, owner.id, 110).await?;

    let repo = BidRepository::new(db);
    let updated = repo
        .update(bid.id, UpdateBidParams { amount: Some(115) })
        .await?
        .unwrap();

    assert_eq!(updated.bid.amount, 115);
    assert_eq!(updated.bidder.unwrap().id, owner.id);
    let stored = entity::prelude::Product::find_by_id(product.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.current_bidding_price, product.current_bidding_price);

    Ok(())
}
