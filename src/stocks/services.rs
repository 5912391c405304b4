use anyhow::Context;
use tracing::{debug, info};

use crate::{error::ApiError, state::AppState, stocks::repo_types::Stock};

/// Applies each entry on its own; earlier entries stay written if a later one fails.
pub async fn upsert_stocks(
    state: &AppState,
    entries: impl IntoIterator<Item = (String, i64)>,
) -> Result<usize, ApiError> {
    let mut applied = 0;
    for (item, expected_count) in entries {
        let stock = state
            .stocks
            .upsert_expected(&item, expected_count)
            .await
            .map_err(anyhow::Error::from)
            .with_context(|| format!("upsert stock {item}"))?;
        debug!(stock_id = %stock.id, item = %stock.item, expected_count, "stock upserted");
        applied += 1;
    }
    info!(applied, "stocks upserted");
    Ok(applied)
}

/// Deleting an unknown item is not an error.
pub async fn delete_stock(state: &AppState, item: &str) -> Result<(), ApiError> {
    let removed = state.stocks.delete_by_item(item).await?;
    info!(item = %item, removed, "stock delete");
    Ok(())
}

pub async fn list_stocks(state: &AppState) -> Result<Vec<Stock>, ApiError> {
    Ok(state.stocks.list().await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn upsert_creates_missing_items_with_zero_detected() {
        let state = AppState::fake();
        let applied = upsert_stocks(&state, [("A".to_string(), 3), ("B".to_string(), 7)])
            .await
            .unwrap();
        assert_eq!(applied, 2);

        let a = state.stocks.find_by_item("A").await.unwrap().unwrap();
        let b = state.stocks.find_by_item("B").await.unwrap().unwrap();
        assert_eq!((a.expected_count, a.detected_count), (3, 0));
        assert_eq!((b.expected_count, b.detected_count), (7, 0));
    }

    #[tokio::test]
    async fn upsert_updates_expected_and_keeps_detected() {
        let state = AppState::fake();
        let stock = state.stocks.upsert_expected("A", 3).await.unwrap();
        state.stocks.save_detected(stock.id, 4).await.unwrap();

        upsert_stocks(&state, [("A".to_string(), 10)]).await.unwrap();

        let stocks = list_stocks(&state).await.unwrap();
        assert_eq!(stocks.len(), 1);
        assert_eq!(stocks[0].id, stock.id);
        assert_eq!(stocks[0].expected_count, 10);
        assert_eq!(stocks[0].detected_count, 4);
    }

    #[tokio::test]
    async fn delete_is_idempotent() {
        let state = AppState::fake();
        state.stocks.upsert_expected("A", 1).await.unwrap();

        delete_stock(&state, "A").await.unwrap();
        delete_stock(&state, "A").await.unwrap();
        delete_stock(&state, "never-existed").await.unwrap();

        assert!(list_stocks(&state).await.unwrap().is_empty());
    }
}
