use super::*;

/// Tests attaching a transaction id after the fact.
///
/// Expected: Ok(Some) with the transaction id set and the amount unchanged
#[tokio::test]
async fn attaches_transaction_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, winner) = factory::helpers::create_auction_winner_with_dependencies(db).await?;
    let payment = factory::create_payment(db, winner.id, 110).await?;

    let repo = PaymentRepository::new(db);
    let updated = repo
        .update(
            payment.id,
            UpdatePaymentParams {
                transaction_id: Some("txn_789".to_string()),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.payment.transaction_id.as_deref(), Some("txn_789"));
    assert_eq!(updated.payment.amount, 110);
    assert_eq!(updated.auction_winner.unwrap().id, winner.id);

    Ok(())
}
