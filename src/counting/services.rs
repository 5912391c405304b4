use anyhow::Context;
use tracing::info;
use uuid::Uuid;

use crate::{
    activity::repo_types::{Activity, ActivityKind, NewActivity},
    error::ApiError,
    state::AppState,
};

/// Logs the count, then adds it to the item's detected count.
///
/// The two writes are not atomic: the activity lands first, and the stock
/// update is a plain read-add-write, so concurrent counts on one item can
/// lose an increment.
pub async fn count_objects(
    state: &AppState,
    user_id: Uuid,
    stock_item: &str,
    counted_amount: i64,
) -> Result<Activity, ApiError> {
    if counted_amount < 0 {
        return Err(ApiError::Validation(
            "Counted amount must not be negative".into(),
        ));
    }

    let Some(stock) = state.stocks.find_by_item(stock_item).await? else {
        return Err(ApiError::NotFound(format!(
            "Stock item '{stock_item}' not found"
        )));
    };

    if state.users.find_by_id(user_id).await?.is_none() {
        return Err(ApiError::NotFound(format!("User '{user_id}' not found")));
    }

    let activity = state
        .activities
        .insert(&NewActivity {
            user_id,
            kind: ActivityKind::Counted {
                stock_id: stock.id,
                item: stock.item.clone(),
                amount: counted_amount,
            },
        })
        .await?;

    let detected = stock
        .detected_count
        .checked_add(counted_amount)
        .with_context(|| format!("detected count overflow for {}", stock.item))?;
    state
        .stocks
        .save_detected(stock.id, detected)
        .await
        .map_err(anyhow::Error::from)
        .with_context(|| format!("update detected count for {}", stock.item))?;

    info!(
        user_id = %user_id,
        stock_id = %stock.id,
        counted_amount,
        detected,
        "objects counted"
    );
    Ok(activity)
}
