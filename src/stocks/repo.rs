use async_trait::async_trait;
use uuid::Uuid;

use crate::{db::PgStore, error::StoreResult, stocks::repo_types::Stock};

#[async_trait]
pub trait StockStore: Send + Sync {
    async fn find_by_item(&self, item: &str) -> StoreResult<Option<Stock>>;
    async fn find_by_id(&self, id: Uuid) -> StoreResult<Option<Stock>>;
    /// Insert-or-update by name; only the expected count is written.
    async fn upsert_expected(&self, item: &str, expected_count: i64) -> StoreResult<Stock>;
    async fn save_detected(&self, id: Uuid, detected_count: i64) -> StoreResult<()>;
    /// Returns whether a row was removed.
    async fn delete_by_item(&self, item: &str) -> StoreResult<bool>;
    async fn list(&self) -> StoreResult<Vec<Stock>>;
}

#[async_trait]
impl StockStore for PgStore {
    async fn find_by_item(&self, item: &str) -> StoreResult<Option<Stock>> {
        let stock = sqlx::query_as::<_, Stock>(
            r#"
            SELECT id, item, expected_count, detected_count
            FROM stocks
            WHERE item = $1
            "#,
        )
        .bind(item)
        .fetch_optional(&self.pool)
        .await?;
        Ok(stock)
    }

    async fn find_by_id(&self, id: Uuid) -> StoreResult<Option<Stock>> {
        let stock = sqlx::query_as::<_, Stock>(
            r#"
            SELECT id, item, expected_count, detected_count
            FROM stocks
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(stock)
    }

    async fn upsert_expected(&self, item: &str, expected_count: i64) -> StoreResult<Stock> {
        let stock = sqlx::query_as::<_, Stock>(
            r#"
            INSERT INTO stocks (id, item, expected_count)
            VALUES ($1, $2, $3)
            ON CONFLICT (item) DO UPDATE SET expected_count = EXCLUDED.expected_count
            RETURNING id, item, expected_count, detected_count
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(item)
        .bind(expected_count)
        .fetch_one(&self.pool)
        .await?;
        Ok(stock)
    }

    async fn save_detected(&self, id: Uuid, detected_count: i64) -> StoreResult<()> {
        sqlx::query(r#"UPDATE stocks SET detected_count = $2 WHERE id = $1"#)
            .bind(id)
            .bind(detected_count)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn delete_by_item(&self, item: &str) -> StoreResult<bool> {
        let done = sqlx::query(r#"DELETE FROM stocks WHERE item = $1"#)
            .bind(item)
            .execute(&self.pool)
            .await?;
        Ok(done.rows_affected() > 0)
    }

    async fn list(&self) -> StoreResult<Vec<Stock>> {
        let rows = sqlx::query_as::<_, Stock>(
            r#"SELECT id, item, expected_count, detected_count FROM stocks"#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}
