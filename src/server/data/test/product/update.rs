use super::*;

/// Tests moving a product through its auction lifecycle.
///
/// Expected: Ok(Some) with the new status and every other field unchanged
#[tokio::test]
async fn updates_auction_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, product) = factory::helpers::create_product_with_dependencies(db).await?;

    let repo = ProductRepository::new(db);
    let updated = repo
        .update(product.id, UpdateProductParams::status(AuctionStatus::Ongoing))
        .await?
        .unwrap();

    assert_eq!(updated.product.auction_status, AuctionStatus::Ongoing);
    assert_eq!(updated.product.product_name, product.product_name);
    assert_eq!(
        updated.product.current_bidding_price,
        product.current_bidding_price
    );

    Ok(())
}

/// Tests moving a product to another category.
///
/// Expected: Ok(Some) with the new category id and the new category expanded
#[tokio::test]
async fn moves_product_to_category() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, product) = factory::helpers::create_product_with_dependencies(db).await?;
    let target = factory::create_category(db).await?;

    let repo = ProductRepository::new(db);
    let updated = repo
        .update(
            product.id,
            UpdateProductParams {
                category_id: Some(target.id),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.product.category_id, target.id);
    assert_eq!(updated.category.unwrap().category_name, target.category_name);

    Ok(())
}

/// Tests updating a product that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_product() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_marketplace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ProductRepository::new(db);
    let result = repo
        .update(404, UpdateProductParams::status(AuctionStatus::End))
        .await?;

    assert!(result.is_none());

    Ok(())
}
