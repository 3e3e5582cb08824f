use super::*;

/// Tests reassigning a win to another user.
///
/// Expected: Ok(Some) with the new winning user
#[tokio::test]
async fn reassigns_winner() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, winner) = factory::helpers::create_auction_winner_with_dependencies(db).await?;
    let runner_up = factory::create_user(db).await?;

    let repo = AuctionWinnerRepository::new(db);
    let updated = repo
        .update(
            winner.id,
            UpdateAuctionWinnerParams {
                auction_winner_id: Some(runner_up.id),
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.auction_winner.auction_winner_id, runner_up.id);
    assert_eq!(updated.auction_winner.product_id, winner.product_id);
    assert_eq!(updated.winner.unwrap().id, runner_up.id);

    Ok(())
}
