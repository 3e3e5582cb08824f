use super::*;

/// Tests filtering bids by product.
///
/// Expected: Ok with only that product's bids, sorted by amount, each with its product
#[tokio::test]
async fn filters_by_product() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, category, first) = factory::helpers::create_product_with_dependencies(db).await?;
    let second = factory::create_product(db, category.id, owner.id).await?;
    factory::create_bid(db, first.id, owner.id, 120).await?;
    factory::create_bid(db, first.id, owner.id, 110).await?;
    factory::create_bid(db, second.id, owner.id, 110).await?;

    let repo = BidRepository::new(db);
    let product_id = first.id.to_string();
    let query = list_query(
        &[("productId", product_id.as_str()), ("sortBy", "amount")],
        &BID_QUERY,
    );
    let (bids, total) = repo.get_all(&query).await?;

    let amounts: Vec<i64> = bids.iter().map(|b| b.bid.amount).collect();
    assert_eq!(total, 2);
    assert_eq!(amounts, vec![110, 120]);
    assert!(bids
        .iter()
        .all(|b| b.product.as_ref().map(|p| p.id) == Some(first.id)));
    assert!(bids
        .iter()
        .all(|b| b.bidder.as_ref().map(|u| u.id) == Some(owner.id)));

    Ok(())
}
