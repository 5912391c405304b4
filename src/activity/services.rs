use std::collections::HashMap;

use uuid::Uuid;

use crate::{
    activity::dto::{ActivityLogEntry, ActivitySummary, NO_STOCK_ITEM, UNKNOWN_USER},
    error::{ApiError, StoreResult},
    state::AppState,
    stocks::repo_types::Stock,
};

/// Resolves user names and stock rows once per request.
struct Lookup<'a> {
    state: &'a AppState,
    names: HashMap<Uuid, Option<String>>,
    stocks: HashMap<Uuid, Option<Stock>>,
}

impl<'a> Lookup<'a> {
    fn new(state: &'a AppState) -> Self {
        Self {
            state,
            names: HashMap::new(),
            stocks: HashMap::new(),
        }
    }

    async fn full_name(&mut self, user_id: Uuid) -> StoreResult<String> {
        if !self.names.contains_key(&user_id) {
            let name = self.state.users.find_by_id(user_id).await?.map(|u| u.full_name);
            self.names.insert(user_id, name);
        }
        Ok(self
            .names
            .get(&user_id)
            .cloned()
            .flatten()
            .unwrap_or_else(|| UNKNOWN_USER.to_string()))
    }

    async fn stock(&mut self, stock_id: Option<Uuid>) -> StoreResult<Option<Stock>> {
        let Some(id) = stock_id else {
            return Ok(None);
        };
        if !self.stocks.contains_key(&id) {
            let stock = self.state.stocks.find_by_id(id).await?;
            self.stocks.insert(id, stock);
        }
        Ok(self.stocks.get(&id).cloned().flatten())
    }
}

pub async fn list_for_user(
    state: &AppState,
    user_id: Uuid,
) -> Result<Vec<ActivityLogEntry>, ApiError> {
    let activities = state.activities.list(Some(user_id)).await?;
    let mut lookup = Lookup::new(state);
    let mut out = Vec::with_capacity(activities.len());

    for a in activities {
        let full_name = lookup.full_name(a.user_id).await?;
        let stock = lookup.stock(a.stock_id).await?;
        let (stock_item, expected_stock, detected_stock) = match stock {
            Some(s) => (s.item, s.expected_count, s.detected_count),
            None => (NO_STOCK_ITEM.to_string(), 0, 0),
        };
        out.push(ActivityLogEntry {
            id: a.id,
            user_id: a.user_id,
            full_name,
            action: a.action,
            stock_item,
            counted_amount: a.counted_amount,
            expected_stock,
            detected_stock,
            timestamp: a.created_at,
        });
    }
    Ok(out)
}

pub async fn list_all(state: &AppState) -> Result<Vec<ActivitySummary>, ApiError> {
    let activities = state.activities.list(None).await?;
    let mut lookup = Lookup::new(state);
    let mut out = Vec::with_capacity(activities.len());

    for a in activities {
        out.push(ActivitySummary {
            id: a.id,
            user_id: a.user_id,
            full_name: lookup.full_name(a.user_id).await?,
            action: a.action,
            object_count: a.counted_amount,
            timestamp: a.created_at,
        });
    }
    Ok(out)
}
