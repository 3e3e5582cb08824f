use super::*;

/// Tests recording a payment for a win.
///
/// Expected: Ok with the transaction id stored
#[tokio::test]
async fn records_payment() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, winner) = factory::helpers::create_auction_winner_with_dependencies(db).await?;

    let repo = PaymentRepository::new(db);
    let payment = repo
        .create(CreatePaymentParams {
            auction_winner_id: winner.id,
            amount: 110,
            transaction_id: Some("txn_123".to_string()),
        })
        .await?;

    assert_eq!(payment.amount, 110);
    assert_eq!(payment.transaction_id.as_deref(), Some("txn_123"));

    Ok(())
}

/// Tests paying twice for the same win.
///
/// Expected: Err with a unique constraint violation
#[tokio::test]
async fn rejects_second_payment_for_win() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, winner) = factory::helpers::create_auction_winner_with_dependencies(db).await?;
    factory::create_payment(db, winner.id, 110).await?;

    let repo = PaymentRepository::new(db);
    let err = repo
        .create(CreatePaymentParams {
            auction_winner_id: winner.id,
            amount: 110,
            transaction_id: None,
        })
        .await
        .unwrap_err();

    assert!(matches!(
        err.sql_err(),
        Some(SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}
