//! In-memory stores for unit tests.

use std::sync::Mutex;

use anyhow::anyhow;
use async_trait::async_trait;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::{
    activity::{
        repo::ActivityStore,
        repo_types::{Activity, NewActivity},
    },
    auth::{
        repo::UserStore,
        repo_types::{NewUser, User},
    },
    error::{StoreError, StoreResult},
    stocks::{repo::StockStore, repo_types::Stock},
};

#[derive(Default)]
struct Tables {
    users: Vec<User>,
    stocks: Vec<Stock>,
    activities: Vec<Activity>,
}

#[derive(Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
}

impl MemoryStore {
    fn tables(&self) -> StoreResult<std::sync::MutexGuard<'_, Tables>> {
        self.tables
            .lock()
            .map_err(|_| StoreError::Backend(anyhow!("memory store poisoned")))
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn find_by_email(&self, email: &str) -> StoreResult<Option<User>> {
        Ok(self.tables()?.users.iter().find(|u| u.email == email).cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> StoreResult<Option<User>> {
        Ok(self.tables()?.users.iter().find(|u| u.id == id).cloned())
    }

    async fn create(&self, new: &NewUser<'_>) -> StoreResult<User> {
        let mut t = self.tables()?;
        if t.users.iter().any(|u| u.email == new.email) {
            return Err(StoreError::Conflict(format!(
                "duplicate key value violates unique constraint on email {}",
                new.email
            )));
        }
        let user = User {
            id: Uuid::new_v4(),
            email: new.email.to_string(),
            password_hash: new.password_hash.to_string(),
            full_name: new.full_name.to_string(),
            created_at: OffsetDateTime::now_utc(),
        };
        t.users.push(user.clone());
        Ok(user)
    }
}

#[async_trait]
impl StockStore for MemoryStore {
    async fn find_by_item(&self, item: &str) -> StoreResult<Option<Stock>> {
        Ok(self.tables()?.stocks.iter().find(|s| s.item == item).cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> StoreResult<Option<Stock>> {
        Ok(self.tables()?.stocks.iter().find(|s| s.id == id).cloned())
    }

    async fn upsert_expected(&self, item: &str, expected_count: i64) -> StoreResult<Stock> {
        let mut t = self.tables()?;
        if let Some(stock) = t.stocks.iter_mut().find(|s| s.item == item) {
            stock.expected_count = expected_count;
            return Ok(stock.clone());
        }
        let stock = Stock {
            id: Uuid::new_v4(),
            item: item.to_string(),
            expected_count,
            detected_count: 0,
        };
        t.stocks.push(stock.clone());
        Ok(stock)
    }

    async fn save_detected(&self, id: Uuid, detected_count: i64) -> StoreResult<()> {
        let mut t = self.tables()?;
        if let Some(stock) = t.stocks.iter_mut().find(|s| s.id == id) {
            stock.detected_count = detected_count;
        }
        Ok(())
    }

    async fn delete_by_item(&self, item: &str) -> StoreResult<bool> {
        let mut t = self.tables()?;
        let before = t.stocks.len();
        t.stocks.retain(|s| s.item != item);
        Ok(t.stocks.len() != before)
    }

    async fn list(&self) -> StoreResult<Vec<Stock>> {
        Ok(self.tables()?.stocks.clone())
    }
}

#[async_trait]
impl ActivityStore for MemoryStore {
    async fn insert(&self, new: &NewActivity) -> StoreResult<Activity> {
        let mut t = self.tables()?;
        if !t.users.iter().any(|u| u.id == new.user_id) {
            return Err(StoreError::Backend(anyhow!(
                "activity references unknown user {}",
                new.user_id
            )));
        }
        let activity = Activity {
            id: Uuid::new_v4(),
            user_id: new.user_id,
            action: new.kind.label(),
            stock_id: new.kind.stock_id(),
            counted_amount: new.kind.counted_amount(),
            created_at: OffsetDateTime::now_utc(),
        };
        t.activities.push(activity.clone());
        Ok(activity)
    }

    async fn list(&self, user_id: Option<Uuid>) -> StoreResult<Vec<Activity>> {
        let t = self.tables()?;
        // Reverse first so the stable sort keeps later inserts ahead on equal timestamps.
        let mut rows: Vec<Activity> = t
            .activities
            .iter()
            .rev()
            .filter(|a| user_id.map_or(true, |id| a.user_id == id))
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(rows)
    }
}
