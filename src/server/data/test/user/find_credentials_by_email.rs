use super::*;

/// Tests looking up credentials by email.
///
/// Expected: Ok(Some) carrying the stored hash
#[tokio::test]
async fn finds_credentials_for_known_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .email("known@example.com")
        .password("stored-hash")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let credentials = repo
        .find_credentials_by_email("known@example.com")
        .await?
        .unwrap();

    assert_eq!(credentials.user.id, user.id);
    assert_eq!(credentials.password_hash, "stored-hash");

    Ok(())
}

/// Tests looking up an email nobody registered.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let result = repo.find_credentials_by_email("ghost@example.com").await?;

    assert!(result.is_none());

    Ok(())
}
