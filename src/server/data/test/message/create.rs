use super::*;

/// Tests posting a message on a product.
///
/// Expected: Ok with content, product and sender stored
#[tokio::test]
async fn posts_message() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, product) = factory::helpers::create_product_with_dependencies(db).await?;
    let sender = factory::create_user(db).await?;

    let repo = MessageRepository::new(db);
    let message = repo
        .create(CreateMessageParams {
            content: "What is the reserve?".to_string(),
            product_id: product.id,
            sender_id: sender.id,
        })
        .await?;

    assert_eq!(message.content, "What is the reserve?");
    assert_eq!(message.product_id, product.id);
    assert_eq!(message.sender_id, sender.id);

    Ok(())
}
