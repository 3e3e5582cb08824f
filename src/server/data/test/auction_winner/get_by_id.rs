use super::*;

/// Tests loading a winner with product, user and payment.
///
/// Expected: Ok(Some) with every relation populated
#[tokio::test]
async fn loads_winner_relations() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (product, user, winner) =
        factory::helpers::create_auction_winner_with_dependencies(db).await?;
    let payment = factory::create_payment(db, winner.id, 110).await?;

    let repo = AuctionWinnerRepository::new(db);
    let detail = repo.get_by_id(winner.id).await?.unwrap();

    assert_eq!(detail.product.unwrap().id, product.id);
    assert_eq!(detail.winner.unwrap().id, user.id);
    assert_eq!(detail.payment.unwrap().id, payment.id);

    Ok(())
}
