use super::*;

/// Tests loading a category with its products.
///
/// Expected: Ok(Some) with both products attached
#[tokio::test]
async fn loads_category_products() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_product_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, category, _) = factory::helpers::create_product_with_dependencies(db).await?;
    factory::create_product(db, category.id, owner.id).await?;

    let repo = CategoryRepository::new(db);
    let detail = repo.get_by_id(category.id).await?.unwrap();

    assert_eq!(detail.category.id, category.id);
    assert_eq!(detail.products.len(), 2);

    Ok(())
}

/// Tests loading a category that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_category() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_product_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CategoryRepository::new(db);

    assert!(repo.get_by_id(42).await?.is_none());

    Ok(())
}
