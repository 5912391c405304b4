use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

pub const LOGGED_IN: &str = "Logged In";

/// What a user did. Only a login may omit the stock reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActivityKind {
    Login,
    Counted {
        stock_id: Uuid,
        item: String,
        amount: i64,
    },
}

impl ActivityKind {
    pub fn label(&self) -> String {
        match self {
            ActivityKind::Login => LOGGED_IN.to_string(),
            ActivityKind::Counted { item, amount, .. } => format!("Counted {amount} of {item}"),
        }
    }

    pub fn stock_id(&self) -> Option<Uuid> {
        match self {
            ActivityKind::Login => None,
            ActivityKind::Counted { stock_id, .. } => Some(*stock_id),
        }
    }

    pub fn counted_amount(&self) -> i64 {
        match self {
            ActivityKind::Login => 0,
            ActivityKind::Counted { amount, .. } => *amount,
        }
    }
}

#[derive(Debug, Clone)]
pub struct NewActivity {
    pub user_id: Uuid,
    pub kind: ActivityKind,
}

/// Activity row as stored; append-only.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Activity {
    pub id: Uuid,
    pub user_id: Uuid,
    pub action: String,
    pub stock_id: Option<Uuid>,
    pub counted_amount: i64,
    pub created_at: OffsetDateTime,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_has_no_stock_reference() {
        let kind = ActivityKind::Login;
        assert_eq!(kind.label(), "Logged In");
        assert_eq!(kind.stock_id(), None);
        assert_eq!(kind.counted_amount(), 0);
    }

    #[test]
    fn counted_label_names_amount_and_item() {
        let stock_id = Uuid::new_v4();
        let kind = ActivityKind::Counted {
            stock_id,
            item: "Widgets".into(),
            amount: 5,
        };
        assert_eq!(kind.label(), "Counted 5 of Widgets");
        assert_eq!(kind.stock_id(), Some(stock_id));
        assert_eq!(kind.counted_amount(), 5);
    }
}
