use super::*;

/// Tests loading a message with its product and sender.
///
/// Expected: Ok(Some) with both relations
#[tokio::test]
async fn loads_message_relations() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, product) = factory::helpers::create_product_with_dependencies(db).await?;
    let sender = factory::create_user(db).await?;
    let message = factory::create_message(db, product.id, sender.id, "Hello").await?;

    let repo = MessageRepository::new(db);
    let detail = repo.get_by_id(message.id).await?.unwrap();

    assert_eq!(detail.product.unwrap().id, product.id);
    assert_eq!(detail.sender.unwrap().id, sender.id);

    Ok(())
}
