use std::collections::BTreeMap;

use serde::Serialize;

/// `{ "<item name>": <expected count>, ... }`
pub type UpsertStocksRequest = BTreeMap<String, i64>;

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
