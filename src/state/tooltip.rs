use super::TileMode;
use crate::model::{Item, StatField};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TooltipReason {
    pub text: String,
    /// `cannot-buy-reason` or `cannot-use-reason`.
    pub class: &'static str,
}

/// Contents of the `item-stats` box for one hovered tile.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tooltip {
    pub reason: Option<TooltipReason>,
    pub caption: String,
    pub description: String,
    /// Present stat values in `StatField::ORDERED` order.
    pub stats: Vec<String>,
    pub price: Option<String>,
}

impl Tooltip {
    pub fn for_item(item: &Item, mode: TileMode) -> Self {
        let reason = mode.blocking_reason(item).map(|text| TooltipReason {
            text: text.to_string(),
            class: match mode {
                TileMode::Shop { .. } => "cannot-buy-reason",
                TileMode::Inventory | TileMode::Admin => "cannot-use-reason",
            },
        });
        let stats = StatField::ORDERED
            .iter()
            .filter_map(|field| item.stat(*field).map(str::to_string))
            .collect();
        Self {
            reason,
            caption: item.caption.clone(),
            description: item.description.clone(),
            stats,
            price: item.stat_price.clone(),
        }
    }
}

/// `(top, left)` in pixels for the tooltip box, given the pointer's screen position.
pub fn tooltip_position(screen_x: i32, screen_y: i32, offset_x: i32, offset_y: i32) -> (i32, i32) {
    (screen_y + offset_y, screen_x + offset_x)
}
