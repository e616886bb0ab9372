//! Wire types exchanged with the economy server over the MOTD channel.
//! The server owns every value here; the client only keeps the latest snapshot.

use crate::state::{CategoryFilter, ListKind};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;
use std::rc::Rc;
use yew::Reducible;

/// Identifier as the server sent it. Echoed back unchanged in requests.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WireId {
    Number(i64),
    Text(String),
}

impl fmt::Display for WireId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WireId::Number(n) => write!(f, "{n}"),
            WireId::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for WireId {
    fn from(value: &str) -> Self {
        WireId::Text(value.to_string())
    }
}

impl From<i64> for WireId {
    fn from(value: i64) -> Self {
        WireId::Number(value)
    }
}

/// Stat lines shown in the item tooltip, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatField {
    MaxPerSlot,
    TeamRestriction,
    ManualActivation,
    AutoActivation,
    MaxSoldPerRound,
}

impl StatField {
    pub const ORDERED: [StatField; 5] = [
        StatField::MaxPerSlot,
        StatField::TeamRestriction,
        StatField::ManualActivation,
        StatField::AutoActivation,
        StatField::MaxSoldPerRound,
    ];
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Item {
    pub class_id: WireId,
    pub instance_id: WireId,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub caption: String,
    #[serde(default)]
    pub description: String,
    /// Present on inventory records.
    #[serde(default)]
    pub amount: Option<u64>,
    /// Present on shop records, in credits.
    #[serde(default)]
    pub price: Option<i64>,
    #[serde(default)]
    pub category_id: Option<WireId>,
    #[serde(default)]
    pub cannot_use_reason: Option<String>,
    #[serde(default)]
    pub cannot_buy_reason: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub stat_max_per_slot: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub stat_team_restriction: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub stat_manual_activation: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub stat_auto_activation: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub stat_max_sold_per_round: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub stat_price: Option<String>,
}

impl Item {
    pub fn stat(&self, field: StatField) -> Option<&str> {
        let value = match field {
            StatField::MaxPerSlot => &self.stat_max_per_slot,
            StatField::TeamRestriction => &self.stat_team_restriction,
            StatField::ManualActivation => &self.stat_manual_activation,
            StatField::AutoActivation => &self.stat_auto_activation,
            StatField::MaxSoldPerRound => &self.stat_max_sold_per_round,
        };
        value.as_deref()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Category {
    pub id: WireId,
    #[serde(default)]
    pub caption: String,
    #[serde(default)]
    pub hide_from_shop: bool,
}

/// The account screen gets a pre-formatted string, the shop gets cents.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum AccountValue {
    Cents(i64),
    Formatted(String),
}

impl AccountValue {
    pub fn cents(&self) -> Option<i64> {
        match self {
            AccountValue::Cents(c) => Some(*c),
            AccountValue::Formatted(_) => None,
        }
    }
}

impl fmt::Display for AccountValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccountValue::Cents(c) => write!(f, "{c}"),
            AccountValue::Formatted(s) => f.write_str(s),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ServerResponse {
    #[serde(default)]
    pub account: Option<AccountValue>,
    #[serde(default)]
    pub account_formatted: Option<String>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub inventory_items: Option<Vec<Item>>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub shop_items: Option<Vec<Item>>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub categories: Option<Vec<Category>>,
    #[serde(default)]
    pub popup_notify: Option<String>,
    #[serde(default)]
    pub popup_error: Option<String>,
    /// Application error code such as `APPERR_UNKNOWN_ITEM`.
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "kebab-case")]
pub enum Request {
    Init,
    Update,
    Buy {
        class_id: WireId,
        instance_id: WireId,
    },
    Use {
        class_id: WireId,
        instance_id: WireId,
    },
    ViewInventory {
        steamid: String,
    },
    GiveItem {
        steamid: String,
        class_id: WireId,
        instance_id: WireId,
        amount: u32,
    },
}

impl Request {
    pub fn action(&self) -> &'static str {
        match self {
            Request::Init => "init",
            Request::Update => "update",
            Request::Buy { .. } => "buy",
            Request::Use { .. } => "use",
            Request::ViewInventory { .. } => "view-inventory",
            Request::GiveItem { .. } => "give-item",
        }
    }
}

// Stats arrive as localized strings, but numbers and flags are tolerated.
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s),
        Some(other) => Some(other.to_string()),
    })
}

// A malformed record is dropped on its own instead of failing the whole payload.
fn lenient_list<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let values = Option::<Vec<Value>>::deserialize(deserializer)?;
    Ok(values.map(|values| {
        values
            .into_iter()
            .enumerate()
            .filter_map(|(index, value)| match serde_json::from_value(value) {
                Ok(record) => Some(record),
                Err(err) => {
                    log::warn!("skipping malformed record #{index}: {err}");
                    None
                }
            })
            .collect()
    }))
}

// ---------------- Reducer & Actions -----------------

/// Latest economy snapshot plus the client-only category selection.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EconomyState {
    pub account: i64,
    pub account_formatted: Option<String>,
    pub categories: Vec<Category>,
    pub shop_items: Vec<Item>,
    pub inventory_items: Vec<Item>,
    pub active_shop: CategoryFilter,
    pub active_inventory: CategoryFilter,
    /// Bumped on every applied response.
    pub version: u64,
    /// Set once a response carried `inventory_items`.
    pub inventory_received: bool,
}

impl EconomyState {
    pub fn active(&self, list: ListKind) -> &CategoryFilter {
        match list {
            ListKind::Shop => &self.active_shop,
            ListKind::Inventory => &self.active_inventory,
        }
    }
}

#[derive(Clone, Debug)]
pub enum EconomyAction {
    ApplyResponse(ServerResponse),
    SelectCategory {
        list: ListKind,
        filter: CategoryFilter,
    },
}

impl Reducible for EconomyState {
    type Action = EconomyAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut new = (*self).clone();
        match action {
            EconomyAction::ApplyResponse(resp) => {
                if let Some(cents) = resp.account.as_ref().and_then(AccountValue::cents) {
                    new.account = cents;
                }
                if let Some(text) = resp.account_formatted {
                    new.account_formatted = Some(text);
                }
                if let Some(categories) = resp.categories {
                    new.categories = categories;
                }
                if let Some(items) = resp.shop_items {
                    new.shop_items = items;
                }
                if let Some(items) = resp.inventory_items {
                    new.inventory_items = items;
                    new.inventory_received = true;
                }
                new.version = new.version.wrapping_add(1);
            }
            EconomyAction::SelectCategory { list, filter } => match list {
                ListKind::Shop => new.active_shop = filter,
                ListKind::Inventory => new.active_inventory = filter,
            },
        }
        Rc::new(new)
    }
}
