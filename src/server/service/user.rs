use entity::user::Column;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::{
        page::Page,
        user::{UpdateUserParams, User, UserDetail},
    },
    query::ListQuery,
    util::password::PasswordHasher,
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
    hasher: &'a PasswordHasher,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection, hasher: &'a PasswordHasher) -> Self {
        Self { db, hasher }
    }

    pub async fn get_all(&self, query: ListQuery<Column>) -> Result<Page<User>, AppError> {
        let (items, total) = UserRepository::new(self.db).get_all(&query).await?;

        Ok(Page {
            items,
            total,
            pagination: query.pagination,
        })
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<UserDetail>, AppError> {
        Ok(UserRepository::new(self.db).get_by_id(id).await?)
    }

    /// Applies an administrative update, re-hashing the password when one is given.
    pub async fn update(
        &self,
        id: i32,
        mut params: UpdateUserParams,
    ) -> Result<Option<User>, AppError> {
        if let Some(password) = params.password.take() {
            params.password = Some(self.hasher.hash(password).await?);
        }

        Ok(UserRepository::new(self.db).update(id, params).await?)
    }

    pub async fn delete(&self, id: i32) -> Result<Option<User>, AppError> {
        Ok(UserRepository::new(self.db).delete(id).await?)
    }

    /// Gets the caller's own account with its relations.
    ///
    /// # Returns
    /// - `Err(AuthError::SubjectNotFound)` - The token outlived the account
    pub async fn get_profile(&self, user_id: i32) -> Result<UserDetail, AppError> {
        UserRepository::new(self.db)
            .get_by_id(user_id)
            .await?
            .ok_or_else(|| AuthError::SubjectNotFound(user_id).into())
    }

    /// Updates the caller's own account.
    ///
    /// # Returns
    /// - `Err(AuthError::RoleChangeForbidden)` - Payload tried to set a role; nothing is written
    /// - `Err(AuthError::SubjectNotFound)` - The token outlived the account
    pub async fn update_profile(
        &self,
        user_id: i32,
        params: UpdateUserParams,
    ) -> Result<User, AppError> {
        if params.role.is_some() {
            return Err(AuthError::RoleChangeForbidden.into());
        }

        self.update(user_id, params)
            .await?
            .ok_or_else(|| AuthError::SubjectNotFound(user_id).into())
    }
}
