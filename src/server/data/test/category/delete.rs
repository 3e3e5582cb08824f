use super::*;

/// Tests deleting a category that still has products.
///
/// Expected: Ok(Some) and the products removed by the cascade
#[tokio::test]
async fn deletes_category_with_products() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_product_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, category, _) = factory::helpers::create_product_with_dependencies(db).await?;

    let repo = CategoryRepository::new(db);
    let deleted = repo.delete(category.id).await?.unwrap();

    assert_eq!(deleted.id, category.id);
    assert_eq!(entity::prelude::ProductCategory::find().count(db).await?, 0);
    assert_eq!(entity::prelude::Product::find().count(db).await?, 0);

    Ok(())
}

/// Tests deleting a category that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_category() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ProductCategory)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CategoryRepository::new(db);

    assert!(repo.delete(7).await?.is_none());

    Ok(())
}
