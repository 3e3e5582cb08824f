use super::*;

/// Tests that the total reflects the search, not the whole table.
///
/// Expected: Ok with one page of one row and a total of two matches
#[tokio::test]
async fn counts_only_matching_categories() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_product_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for name in ["Vintage Cars", "Vintage Watches", "Books"] {
        factory::category::CategoryFactory::new(db)
            .category_name(name)
            .build()
            .await?;
    }

    let repo = CategoryRepository::new(db);
    let query = list_query(
        &[("searchTerm", "Vintage"), ("limit", "1"), ("sortBy", "categoryName")],
        &CATEGORY_QUERY,
    );
    let (categories, total) = repo.get_all(&query).await?;

    assert_eq!(total, 2);
    assert_eq!(categories.len(), 1);
    assert_eq!(categories[0].category.category_name, "Vintage Cars");
    assert!(categories[0].products.is_empty());

    Ok(())
}

/// Tests listing without any parameters.
///
/// Expected: Ok with every row, newest first
#[tokio::test]
async fn lists_everything_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_product_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_category(db).await?;
    factory::create_category(db).await?;

    let repo = CategoryRepository::new(db);
    let (categories, total) = repo.get_all(&list_query(&[], &CATEGORY_QUERY)).await?;

    assert_eq!(total, 2);
    assert!(categories[0].category.created_at >= categories[1].category.created_at);

    Ok(())
}
