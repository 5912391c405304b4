use axum::{
    extract::{Path, State},
    routing::{delete, get},
    Json, Router,
};
use tracing::instrument;

use crate::{
    error::ApiError,
    request::JsonBody,
    state::AppState,
    stocks::{
        dto::{MessageResponse, UpsertStocksRequest},
        repo_types::Stock,
        services,
    },
};

pub fn stock_routes() -> Router<AppState> {
    Router::new()
        .route("/api/stocks", get(list_stocks).post(upsert_stocks))
        .route("/api/stocks/:item", delete(delete_stock))
}

#[instrument(skip(state, payload))]
pub async fn upsert_stocks(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<UpsertStocksRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    services::upsert_stocks(&state, payload).await?;
    Ok(Json(MessageResponse::new("Stock updated successfully")))
}

#[instrument(skip(state))]
pub async fn delete_stock(
    State(state): State<AppState>,
    Path(item): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    services::delete_stock(&state, &item).await?;
    Ok(Json(MessageResponse::new(format!("Deleted {item} successfully"))))
}

#[instrument(skip(state))]
pub async fn list_stocks(State(state): State<AppState>) -> Result<Json<Vec<Stock>>, ApiError> {
    Ok(Json(services::list_stocks(&state).await?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn upsert_then_list_serializes_wire_shape() {
        let state = AppState::fake();
        let payload: UpsertStocksRequest =
            serde_json::from_str(r#"{"Widgets": 12, "Bolts": 40}"#).unwrap();

        let Json(ack) = upsert_stocks(State(state.clone()), JsonBody(payload)).await.unwrap();
        assert_eq!(ack.message, "Stock updated successfully");

        let Json(stocks) = list_stocks(State(state)).await.unwrap();
        let json = serde_json::to_value(&stocks).unwrap();
        let widgets = json
            .as_array()
            .unwrap()
            .iter()
            .find(|s| s["item"] == "Widgets")
            .expect("widgets listed");
        assert_eq!(widgets["expectedCount"], 12);
        assert_eq!(widgets["detectedCount"], 0);
        assert!(widgets["_id"].is_string());
    }

    #[tokio::test]
    async fn delete_names_the_item() {
        let Json(ack) = delete_stock(State(AppState::fake()), Path("Widgets".into()))
            .await
            .unwrap();
        assert_eq!(ack.message, "Deleted Widgets successfully");
    }
}
