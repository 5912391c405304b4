use axum::{extract::State, routing::post, Json, Router};
use tracing::{instrument, warn};
use uuid::Uuid;

use crate::{
    counting::{dto::CountObjectsRequest, services},
    error::ApiError,
    request::{present, JsonBody},
    state::AppState,
    stocks::dto::MessageResponse,
};

pub fn count_routes() -> Router<AppState> {
    Router::new().route("/api/count_objects", post(count_objects))
}

#[instrument(skip(state, payload))]
pub async fn count_objects(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CountObjectsRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    let (Some(user_id), Some(stock_item), Some(counted_amount)) = (
        present(payload.user_id),
        present(payload.stock_item),
        payload.counted_amount,
    ) else {
        warn!("count_objects with missing fields");
        return Err(ApiError::Validation(
            "User ID, stock item, and count are required".into(),
        ));
    };

    let user_id = Uuid::parse_str(user_id.trim())
        .map_err(|_| ApiError::Validation(format!("Invalid user ID '{user_id}'")))?;

    services::count_objects(&state, user_id, &stock_item, counted_amount).await?;

    Ok(Json(MessageResponse::new(
        "Object count logged and stock updated successfully",
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[tokio::test]
    async fn missing_amount_is_a_validation_error() {
        let err = count_objects(
            State(AppState::fake()),
            JsonBody(CountObjectsRequest {
                user_id: Some(Uuid::new_v4().to_string()),
                stock_item: Some("Widgets".into()),
                counted_amount: None,
            }),
        )
        .await
        .unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn malformed_user_id_is_a_validation_error() {
        let err = count_objects(
            State(AppState::fake()),
            JsonBody(CountObjectsRequest {
                user_id: Some("abc".into()),
                stock_item: Some("Widgets".into()),
                counted_amount: Some(1),
            }),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
    }

    #[tokio::test]
    async fn unknown_item_is_404() {
        let err = count_objects(
            State(AppState::fake()),
            JsonBody(CountObjectsRequest {
                user_id: Some(Uuid::new_v4().to_string()),
                stock_item: Some("Nope".into()),
                counted_amount: Some(1),
            }),
        )
        .await
        .unwrap_err();
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "Stock item 'Nope' not found");
    }
}
