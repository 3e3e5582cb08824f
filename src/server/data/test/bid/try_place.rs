use super::*;

/// Tests placing a bid on a product priced 100 with an increment of 10.
///
/// Expected: Placed with amount 110, the bidder and the product at 110, and the stored
/// price raised to 110
#[tokio::test]
async fn places_bid_at_price_plus_increment() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, product) = factory::helpers::create_product_with_dependencies(db).await?;
    let bidder = factory::create_user(db).await?;

    let repo = BidRepository::new(db);
    let attempt = repo
        .try_place(PlaceBidParams {
            product_id: product.id,
            bidder_id: bidder.id,
        })
        .await?;

    let BidAttempt::Placed(detail) = attempt else {
        panic!("expected bid to be placed, got {:?}", attempt);
    };
    assert_eq!(detail.bid.amount, 110);
    assert_eq!(detail.bid.bidder_id, bidder.id);
    assert_eq!(detail.bidder.unwrap().id, bidder.id);
    assert_eq!(detail.product.unwrap().current_bidding_price, 110);

    let stored = entity::prelude::Product::find_by_id(product.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.current_bidding_price, 110);

    Ok(())
}

/// Tests consecutive bids.
///
/// Expected: amounts climb by the increment each time
#[tokio::test]
async fn consecutive_bids_raise_the_price() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_admin(db).await?;
    let category = factory::create_category(db).await?;
    let product = factory::product::ProductFactory::new(db, category.id, owner.id)
        .price(500)
        .increment_amount(50)
        .build()
        .await?;
    let bidder = factory::create_user(db).await?;

    let repo = BidRepository::new(db);
    let params = PlaceBidParams {
        product_id: product.id,
        bidder_id: bidder.id,
    };
    let mut amounts = Vec::new();
    for _ in 0..3 {
        if let BidAttempt::Placed(detail) = repo.try_place(params).await? {
            amounts.push(detail.bid.amount);
        }
    }

    assert_eq!(amounts, vec![550, 600, 650]);

    Ok(())
}

/// Tests bidding on a product that does not exist.
///
/// Expected: ProductNotFound and no bidding history rows
#[tokio::test]
async fn reports_missing_product_without_writing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let bidder = factory::create_user(db).await?;

    let repo = BidRepository::new(db);
    let attempt = repo
        .try_place(PlaceBidParams {
            product_id: 9999,
            bidder_id: bidder.id,
        })
        .await?;

    assert_eq!(attempt, BidAttempt::ProductNotFound);
    assert_eq!(
        entity::prelude::AuctionBiddingHistory::find()
            .count(db)
            .await?,
        0
    );

    Ok(())
}

/// Tests a bid from a user that does not exist.
///
/// Expected: Err, with the product price left untouched by the rollback
#[tokio::test]
async fn rolls_back_price_when_insert_fails() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, product) = factory::helpers::create_product_with_dependencies(db).await?;

    let repo = BidRepository::new(db);
    let result = repo
        .try_place(PlaceBidParams {
            product_id: product.id,
            bidder_id: 9999,
        })
        .await;

    assert!(result.is_err());
    let stored = entity::prelude::Product::find_by_id(product.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.current_bidding_price, 100);

    Ok(())
}

/// Tests an attempt whose guarded price update matches no row.
///
/// A trigger discards every price update, so the swap always comes back empty.
///
/// Expected: Contended, with no bidding history rows and the price unchanged
#[tokio::test]
async fn reports_lost_price_swap_without_writing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, product) = factory::helpers::create_product_with_dependencies(db).await?;
    let bidder = factory::create_user(db).await?;
    factory::helpers::hold_product_price(db).await?;

    let repo = BidRepository::new(db);
    let attempt = repo
        .try_place(PlaceBidParams {
            product_id: product.id,
            bidder_id: bidder.id,
        })
        .await?;

    assert_eq!(attempt, BidAttempt::Contended);
    assert_eq!(
        entity::prelude::AuctionBiddingHistory::find()
            .count(db)
            .await?,
        0
    );
    let stored = entity::prelude::Product::find_by_id(product.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.current_bidding_price, 100);

    Ok(())
}
