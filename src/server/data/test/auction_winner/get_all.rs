use super::*;

/// Tests filtering winners by the winning user.
///
/// Expected: Ok with only that user's wins
#[tokio::test]
async fn filters_by_winning_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, winner_user, winner) =
        factory::helpers::create_auction_winner_with_dependencies(db).await?;
    factory::helpers::create_auction_winner_with_dependencies(db).await?;

    let repo = AuctionWinnerRepository::new(db);
    let user_id = winner_user.id.to_string();
    let query = list_query(&[("auctionWinnerId", user_id.as_str())], &AUCTION_WINNER_QUERY);
    let (winners, total) = repo.get_all(&query).await?;

    assert_eq!(total, 1);
    assert_eq!(winners[0].auction_winner.id, winner.id);
    assert_eq!(winners[0].product.as_ref().unwrap().id, winner.product_id);

    Ok(())
}
