use super::*;

/// Tests recording a winner.
///
/// Expected: Ok with the winner and no payment created alongside it
#[tokio::test]
async fn records_winner_without_payment() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, product) = factory::helpers::create_product_with_dependencies(db).await?;
    let bidder = factory::create_user(db).await?;

    let repo = AuctionWinnerRepository::new(db);
    let winner = repo
        .create(CreateAuctionWinnerParams {
            product_id: product.id,
            auction_winner_id: bidder.id,
        })
        .await?;

    assert_eq!(winner.product_id, product.id);
    assert_eq!(winner.auction_winner_id, bidder.id);
    assert_eq!(entity::prelude::Payment::find().count(db).await?, 0);

    Ok(())
}

/// Tests recording a second winner for the same product.
///
/// Expected: Err with a unique constraint violation
#[tokio::test]
async fn rejects_second_winner_for_product() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (product, _, _) = factory::helpers::create_auction_winner_with_dependencies(db).await?;
    let rival = factory::create_user(db).await?;

    let repo = AuctionWinnerRepository::new(db);
    let err = repo
        .create(CreateAuctionWinnerParams {
            product_id: product.id,
            auction_winner_id: rival.id,
        })
        .await
        .unwrap_err();

    assert!(matches!(
        err.sql_err(),
        Some(SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}
