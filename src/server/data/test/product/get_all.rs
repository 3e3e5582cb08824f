use super::*;

/// Tests the price range together with the relational category filter.
///
/// Expected: Ok with the single product inside both the range and the category
#[tokio::test]
async fn filters_by_price_range_and_category() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_admin(db).await?;
    let watches = factory::create_category(db).await?;
    let cars = factory::create_category(db).await?;

    let wanted = factory::product::ProductFactory::new(db, watches.id, owner.id)
        .price(300)
        .build()
        .await?;
    factory::product::ProductFactory::new(db, watches.id, owner.id)
        .price(900)
        .build()
        .await?;
    factory::product::ProductFactory::new(db, cars.id, owner.id)
        .price(300)
        .build()
        .await?;

    let repo = ProductRepository::new(db);
    let category_id = watches.id.to_string();
    let query = list_query(
        &[
            ("minPrice", "200"),
            ("maxPrice", "500"),
            ("categoryId", category_id.as_str()),
        ],
        &PRODUCT_QUERY,
    );
    let (products, total) = repo.get_all(&query).await?;

    assert_eq!(total, 1);
    assert_eq!(products[0].product.id, wanted.id);
    assert_eq!(products[0].category.as_ref().unwrap().id, watches.id);

    Ok(())
}

/// Tests filtering by auction status and sorting by price descending.
///
/// Expected: Ok with only ongoing products, most expensive first
#[tokio::test]
async fn filters_by_status_and_sorts_by_price() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_admin(db).await?;
    let category = factory::create_category(db).await?;

    for price in [100, 400, 250] {
        factory::product::ProductFactory::new(db, category.id, owner.id)
            .price(price)
            .auction_status(AuctionStatus::Ongoing)
            .build()
            .await?;
    }
    factory::product::ProductFactory::new(db, category.id, owner.id)
        .price(1000)
        .auction_status(AuctionStatus::End)
        .build()
        .await?;

    let repo = ProductRepository::new(db);
    let query = list_query(
        &[
            ("auctionStatus", "ongoing"),
            ("sortBy", "currentBiddingPrice"),
            ("sortOrder", "desc"),
        ],
        &PRODUCT_QUERY,
    );
    let (products, total) = repo.get_all(&query).await?;

    let prices: Vec<i64> = products
        .iter()
        .map(|p| p.product.current_bidding_price)
        .collect();
    assert_eq!(total, 3);
    assert_eq!(prices, vec![400, 250, 100]);

    Ok(())
}

/// Tests a page past the last row.
///
/// Expected: Ok with no rows but the full total
#[tokio::test]
async fn returns_empty_page_beyond_end() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::helpers::create_product_with_dependencies(db).await?;

    let repo = ProductRepository::new(db);
    let query = list_query(&[("page", "3"), ("limit", "5")], &PRODUCT_QUERY);
    let (products, total) = repo.get_all(&query).await?;

    assert!(products.is_empty());
    assert_eq!(total, 1);

    Ok(())
}
