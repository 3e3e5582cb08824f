use super::*;

/// Tests listing a category's products with relations attached per product.
///
/// Expected: Ok with both products of the category, each with its own bids only
#[tokio::test]
async fn groups_relations_per_product() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, category, first) = factory::helpers::create_product_with_dependencies(db).await?;
    let second = factory::create_product(db, category.id, owner.id).await?;
    let other_category = factory::create_category(db).await?;
    factory::create_product(db, other_category.id, owner.id).await?;

    let bidder = factory::create_user(db).await?;
    factory::create_bid(db, first.id, bidder.id, 110).await?;
    factory::create_bid(db, first.id, bidder.id, 120).await?;
    factory::create_bid(db, second.id, bidder.id, 110).await?;

    let repo = ProductRepository::new(db);
    let products = repo.get_by_category(category.id).await?;

    assert_eq!(products.len(), 2);
    for detail in &products {
        assert_eq!(detail.category.as_ref().unwrap().id, category.id);
        assert_eq!(detail.owner.as_ref().unwrap().id, owner.id);
        let expected = if detail.product.id == first.id { 2 } else { 1 };
        assert_eq!(detail.bids.len(), expected);
    }

    Ok(())
}

/// Tests listing a category without products.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn returns_empty_for_category_without_products() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::create_category(db).await?;

    let repo = ProductRepository::new(db);

    assert!(repo.get_by_category(category.id).await?.is_empty());

    Ok(())
}
