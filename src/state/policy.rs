use crate::model::{Item, Request};

/// How a grid treats its tiles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TileMode {
    /// Price badge; clickable when affordable with the current balance.
    Shop { account: i64 },
    /// Amount badge; clickable unless the server gave a reason not to.
    Inventory,
    /// Amount badge; read-only.
    Admin,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Badge {
    Price { text: String, too_expensive: bool },
    Amount(String),
}

impl TileMode {
    /// Server-supplied reason that blocks the tile's action. Empty strings do not block.
    pub fn blocking_reason<'a>(&self, item: &'a Item) -> Option<&'a str> {
        let reason = match self {
            TileMode::Shop { .. } => item.cannot_buy_reason.as_deref(),
            TileMode::Inventory => item.cannot_use_reason.as_deref(),
            TileMode::Admin => None,
        };
        reason.filter(|r| !r.is_empty())
    }

    /// Class added to a tile whose action is blocked by a reason.
    pub fn blocked_class(&self) -> Option<&'static str> {
        match self {
            TileMode::Shop { .. } => Some("cannot-buy"),
            TileMode::Inventory => Some("cannot-use"),
            TileMode::Admin => None,
        }
    }

    pub fn is_affordable(&self, item: &Item) -> bool {
        match self {
            TileMode::Shop { account } => item.price.unwrap_or(0) <= *account,
            TileMode::Inventory | TileMode::Admin => true,
        }
    }

    pub fn badge(&self, item: &Item) -> Badge {
        match self {
            TileMode::Shop { .. } => Badge::Price {
                text: format!("{}c", item.price.unwrap_or(0)),
                too_expensive: !self.is_affordable(item),
            },
            TileMode::Inventory | TileMode::Admin => {
                Badge::Amount(format!("x{}", item.amount.unwrap_or(0)))
            }
        }
    }

    /// Request posted when the tile is clicked, or `None` for a dead tile.
    pub fn action(&self, item: &Item) -> Option<Request> {
        if self.blocking_reason(item).is_some() || !self.is_affordable(item) {
            return None;
        }
        let class_id = item.class_id.clone();
        let instance_id = item.instance_id.clone();
        match self {
            TileMode::Shop { .. } => Some(Request::Buy {
                class_id,
                instance_id,
            }),
            TileMode::Inventory => Some(Request::Use {
                class_id,
                instance_id,
            }),
            TileMode::Admin => None,
        }
    }
}
