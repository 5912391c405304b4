use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    auth::repo_types::{NewUser, User},
    db::PgStore,
    error::StoreResult,
};

#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_by_email(&self, email: &str) -> StoreResult<Option<User>>;
    async fn find_by_id(&self, id: Uuid) -> StoreResult<Option<User>>;
    /// Fails with `StoreError::Conflict` when the email is taken.
    async fn create(&self, new: &NewUser<'_>) -> StoreResult<User>;
}

#[async_trait]
impl UserStore for PgStore {
    async fn find_by_email(&self, email: &str) -> StoreResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, password_hash, full_name, created_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }

    async fn find_by_id(&self, id: Uuid) -> StoreResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, password_hash, full_name, created_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }

    async fn create(&self, new: &NewUser<'_>) -> StoreResult<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (id, email, password_hash, full_name)
            VALUES ($1, $2, $3, $4)
            RETURNING id, email, password_hash, full_name, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(new.email)
        .bind(new.password_hash)
        .bind(new.full_name)
        .fetch_one(&self.pool)
        .await?;
        Ok(user)
    }
}
