use super::*;

fn params(category_id: i32, product_owner_id: i32) -> CreateProductParams {
    CreateProductParams {
        product_name: "Rolex Submariner".to_string(),
        description: "1968 reference 5513".to_string(),
        image_url: "https://example.com/rolex.png".to_string(),
        auction_date: NaiveDate::from_ymd_opt(2030, 5, 1).unwrap(),
        auction_time: NaiveTime::from_hms_opt(18, 30, 0).unwrap(),
        auction_status: AuctionStatus::NotStarted,
        initial_bidding_price: 5000,
        current_bidding_price: 5000,
        increment_amount: 250,
        category_id,
        product_owner_id,
    }
}

/// Tests creating a product.
///
/// Expected: Ok with prices and status as given, and the category and owner expanded
#[tokio::test]
async fn creates_product() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_admin(db).await?;
    let category = factory::create_category(db).await?;

    let repo = ProductRepository::new(db);
    let product = repo.create(params(category.id, owner.id)).await?;

    assert_eq!(product.product.product_name, "Rolex Submariner");
    assert_eq!(product.product.current_bidding_price, 5000);
    assert_eq!(product.product.increment_amount, 250);
    assert_eq!(product.product.auction_status, AuctionStatus::NotStarted);
    assert_eq!(product.category.unwrap().id, category.id);
    assert_eq!(product.owner.unwrap().id, owner.id);
    assert!(product.bids.is_empty());

    Ok(())
}

/// Tests creating a product in a category that does not exist.
///
/// Expected: Err with a foreign key violation and no product stored
#[tokio::test]
async fn rejects_unknown_category() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_admin(db).await?;

    let repo = ProductRepository::new(db);
    let err = repo.create(params(999, owner.id)).await.unwrap_err();

    assert!(matches!(
        err.sql_err(),
        Some(SqlErr::ForeignKeyConstraintViolation(_))
    ));
    assert_eq!(entity::prelude::Product::find().count(db).await?, 0);

    Ok(())
}
