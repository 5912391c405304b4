use serde::Serialize;
use time::OffsetDateTime;
use uuid::Uuid;

pub const UNKNOWN_USER: &str = "Unknown User";
pub const NO_STOCK_ITEM: &str = "N/A";

/// Per-user listing entry with stock details joined in.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityLogEntry {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub user_id: Uuid,
    pub full_name: String,
    pub action: String,
    pub stock_item: String,
    pub counted_amount: i64,
    pub expected_stock: i64,
    pub detected_stock: i64,
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
}

/// All-users listing entry; `objectCount` carries the counted amount.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivitySummary {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub user_id: Uuid,
    pub full_name: String,
    pub action: String,
    pub object_count: i64,
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
}
