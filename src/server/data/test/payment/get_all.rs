use super::*;

/// Tests sorting payments by amount.
///
/// Expected: Ok with the largest payment first
#[tokio::test]
async fn sorts_by_amount() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for amount in [150, 400] {
        let (_, _, winner) =
            factory::helpers::create_auction_winner_with_dependencies(db).await?;
        factory::create_payment(db, winner.id, amount).await?;
    }

    let repo = PaymentRepository::new(db);
    let query = list_query(&[("sortBy", "amount"), ("sortOrder", "desc")], &PAYMENT_QUERY);
    let (payments, total) = repo.get_all(&query).await?;

    assert_eq!(total, 2);
    assert_eq!(payments[0].payment.amount, 400);
    assert!(payments[0].auction_winner.is_some());

    Ok(())
}
