use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Inventory item keyed by its name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Stock {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub item: String,
    pub expected_count: i64,
    pub detected_count: i64,
}
