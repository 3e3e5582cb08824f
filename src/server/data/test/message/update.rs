use super::*;

/// Tests editing a message.
///
/// Expected: Ok(Some) with the new content
#[tokio::test]
async fn edits_content() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, _, product) = factory::helpers::create_product_with_dependencies(db).await?;
    let message = factory::create_message(db, product.id, owner.id, "Typo").await?;

    let repo = MessageRepository::new(db);
    let updated = repo
        .update(
            message.id,
            UpdateMessageParams {
                content: Some("Fixed".to_string()),
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.message.content, "Fixed");
    assert_eq!(updated.product.unwrap().id, product.id);

    Ok(())
}
