use super::*;

/// Tests creating a category.
///
/// Expected: Ok with the given name
#[tokio::test]
async fn creates_category() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ProductCategory)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CategoryRepository::new(db);
    let category = repo
        .create(CreateCategoryParams {
            category_name: "Watches".to_string(),
        })
        .await?;

    assert_eq!(category.category_name, "Watches");
    assert_eq!(category.created_at, category.updated_at);

    Ok(())
}

/// Tests creating a category whose name is already taken.
///
/// Expected: Err with a unique constraint violation
#[tokio::test]
async fn rejects_duplicate_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ProductCategory)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CategoryRepository::new(db);
    let params = CreateCategoryParams {
        category_name: "Paintings".to_string(),
    };
    repo.create(params.clone()).await?;
    let err = repo.create(params).await.unwrap_err();

    assert!(matches!(
        err.sql_err(),
        Some(SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}
