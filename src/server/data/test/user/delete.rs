use super::*;

/// Tests deleting a user who owns a product.
///
/// Expected: Ok(Some) with the removed user, and the owned product removed by the cascade
#[tokio::test]
async fn deletes_user_and_cascades_to_products() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_product_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, _category, _product) =
        factory::helpers::create_product_with_dependencies(db).await?;

    let repo = UserRepository::new(db);
    let deleted = repo.delete(owner.id).await?.unwrap();

    assert_eq!(deleted.id, owner.id);
    assert_eq!(entity::prelude::User::find().count(db).await?, 0);
    assert_eq!(entity::prelude::Product::find().count(db).await?, 0);

    Ok(())
}

/// Tests deleting a user that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);

    assert!(repo.delete(9999).await?.is_none());

    Ok(())
}
