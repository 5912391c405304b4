use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use tracing::instrument;
use uuid::Uuid;

use crate::{
    activity::{
        dto::{ActivityLogEntry, ActivitySummary},
        services,
    },
    error::ApiError,
    state::AppState,
};

pub fn activity_routes() -> Router<AppState> {
    Router::new()
        .route("/api/activity_logs", get(list_all_activities))
        .route("/api/activity_logs/", get(list_all_activities))
        .route("/api/activity_logs/:user_id", get(list_user_activities))
}

#[instrument(skip(state))]
pub async fn list_user_activities(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<ActivityLogEntry>>, ApiError> {
    let user_id = Uuid::parse_str(&user_id)
        .map_err(|_| ApiError::Validation(format!("Invalid user ID '{user_id}'")))?;
    Ok(Json(services::list_for_user(&state, user_id).await?))
}

#[instrument(skip(state))]
pub async fn list_all_activities(
    State(state): State<AppState>,
) -> Result<Json<Vec<ActivitySummary>>, ApiError> {
    Ok(Json(services::list_all(&state).await?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn malformed_user_id_is_rejected() {
        let err = list_user_activities(State(AppState::fake()), Path("not-a-uuid".into()))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
    }

    #[tokio::test]
    async fn empty_store_lists_nothing() {
        let Json(all) = list_all_activities(State(AppState::fake())).await.unwrap();
        assert!(all.is_empty());
    }
}
