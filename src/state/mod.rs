pub mod category;
pub mod layout;
pub mod policy;
pub mod tooltip;

pub use category::{CategoryFilter, ListKind, visible_categories};
pub use layout::{TileSlot, layout_tiles};
pub use policy::{Badge, TileMode};
pub use tooltip::{Tooltip, TooltipReason, tooltip_position};
