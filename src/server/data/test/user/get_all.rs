use super::*;

/// Tests searching users by a substring of the address combined with a role filter.
///
/// Expected: Ok with only the matching admin and a total counting filtered rows
#[tokio::test]
async fn searches_and_filters_users() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::user::UserFactory::new(db)
        .role(UserRole::Admin)
        .address("Gulshan, Dhaka")
        .build()
        .await?;
    factory::user::UserFactory::new(db)
        .address("Gulshan, Dhaka")
        .build()
        .await?;
    factory::user::UserFactory::new(db)
        .role(UserRole::Admin)
        .address("Chittagong")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let query = list_query(&[("searchTerm", "Gulshan"), ("role", "admin")], &USER_QUERY);
    let (users, total) = repo.get_all(&query).await?;

    assert_eq!(total, 1);
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].id, admin.id);

    Ok(())
}

/// Tests paging through users.
///
/// Expected: Ok with the second page of two rows and the total of all five
#[tokio::test]
async fn pages_through_users() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..5 {
        factory::create_user(db).await?;
    }

    let repo = UserRepository::new(db);
    let query = list_query(
        &[("page", "2"), ("limit", "2"), ("sortBy", "id")],
        &USER_QUERY,
    );
    let (users, total) = repo.get_all(&query).await?;

    assert_eq!(total, 5);
    assert_eq!(users.len(), 2);
    assert!(users[0].id < users[1].id);

    Ok(())
}
