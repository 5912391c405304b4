use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    activity::repo_types::{Activity, NewActivity},
    db::PgStore,
    error::StoreResult,
};

#[async_trait]
pub trait ActivityStore: Send + Sync {
    async fn insert(&self, new: &NewActivity) -> StoreResult<Activity>;
    /// Newest first; `None` lists every user's activities.
    async fn list(&self, user_id: Option<Uuid>) -> StoreResult<Vec<Activity>>;
}

#[async_trait]
impl ActivityStore for PgStore {
    async fn insert(&self, new: &NewActivity) -> StoreResult<Activity> {
        let activity = sqlx::query_as::<_, Activity>(
            r#"
            INSERT INTO activities (id, user_id, action, stock_id, counted_amount)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, user_id, action, stock_id, counted_amount, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(new.user_id)
        .bind(new.kind.label())
        .bind(new.kind.stock_id())
        .bind(new.kind.counted_amount())
        .fetch_one(&self.pool)
        .await?;
        Ok(activity)
    }

    async fn list(&self, user_id: Option<Uuid>) -> StoreResult<Vec<Activity>> {
        let rows = sqlx::query_as::<_, Activity>(
            r#"
            SELECT id, user_id, action, stock_id, counted_amount, created_at
            FROM activities
            WHERE $1::uuid IS NULL OR user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}
