use super::*;

/// Tests renaming a category.
///
/// Expected: Ok(Some) with the new name
#[tokio::test]
async fn renames_category() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_product_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::create_category(db).await?;

    let repo = CategoryRepository::new(db);
    let updated = repo
        .update(
            category.id,
            UpdateCategoryParams {
                category_name: Some("Antiques".to_string()),
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.category.id, category.id);
    assert_eq!(updated.category.category_name, "Antiques");

    Ok(())
}

/// Tests updating a category that does not exist.
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
    let result = repo.update(7, UpdateCategoryParams::default()).await?;

    assert!(result.is_none());

    Ok(())
}
