use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountObjectsRequest {
    pub user_id: Option<String>,
    pub stock_item: Option<String>,
    pub counted_amount: Option<i64>,
}
