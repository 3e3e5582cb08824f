use super::*;

/// Tests searching message content within one product.
///
/// Expected: Ok with the single matching message on that product
#[tokio::test]
async fn searches_content_within_product() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, category, product) =
        factory::helpers::create_product_with_dependencies(db).await?;
    let other = factory::create_product(db, category.id, owner.id).await?;
    factory::create_message(db, product.id, owner.id, "Free shipping included").await?;
    factory::create_message(db, product.id, owner.id, "Pickup only").await?;
    factory::create_message(db, other.id, owner.id, "Free shipping too").await?;

    let repo = MessageRepository::new(db);
    let product_id = product.id.to_string();
    let query = list_query(
        &[("searchTerm", "shipping"), ("productId", product_id.as_str())],
        &MESSAGE_QUERY,
    );
    let (messages, total) = repo.get_all(&query).await?;

    assert_eq!(total, 1);
    assert_eq!(messages[0].message.content, "Free shipping included");
    assert_eq!(messages[0].product.as_ref().unwrap().id, product.id);
    assert_eq!(messages[0].sender.as_ref().unwrap().id, owner.id);

    Ok(())
}
