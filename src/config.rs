//! Mount-time configuration passed by the page bootstrap.
//! Every field is optional on the JavaScript side.

use crate::error::MotdError;
use serde::Deserialize;
use wasm_bindgen::JsValue;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ChannelNames {
    pub account: String,
    pub shop: String,
    pub inventory: String,
    pub admin_items: String,
}

impl Default for ChannelNames {
    fn default() -> Self {
        Self {
            account: "json-account".into(),
            shop: "json-shop".into(),
            // the server serves the inventory page from the shop channel
            inventory: "json-shop".into(),
            admin_items: "ajax-su-offline-items".into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MotdConfig {
    /// Prefix joined with each item's `icon` file name.
    pub icon_base_url: String,
    pub row_length: usize,
    pub admin_row_length: usize,
    pub notify_fade_ms: u32,
    pub notify_remove_ms: u32,
    pub tooltip_offset_x: i32,
    pub tooltip_offset_y: i32,
    pub channels: ChannelNames,
    /// Caption of a leading "all" button in category bars. No button when unset.
    pub all_caption: Option<String>,
    pub log_level: String,
}

impl Default for MotdConfig {
    fn default() -> Self {
        Self {
            icon_base_url: "/static/arcjail/img/items/".into(),
            row_length: 9,
            admin_row_length: 10,
            notify_fade_ms: 1000,
            notify_remove_ms: 3500,
            tooltip_offset_x: 15,
            tooltip_offset_y: 2,
            channels: ChannelNames::default(),
            all_caption: None,
            log_level: "info".into(),
        }
    }
}

impl MotdConfig {
    /// Reads the optional config object handed to `mount`.
    pub fn from_js(value: JsValue) -> Result<Self, MotdError> {
        if value.is_undefined() || value.is_null() {
            return Ok(Self::default());
        }
        let config: Self = serde_wasm_bindgen::from_value(value)
            .map_err(|e| MotdError::Config(e.to_string()))?;
        config.validate()
    }

    pub fn validate(self) -> Result<Self, MotdError> {
        if self.row_length == 0 || self.admin_row_length == 0 {
            return Err(MotdError::Config("row lengths must be positive".into()));
        }
        if self.notify_fade_ms > self.notify_remove_ms {
            return Err(MotdError::Config(
                "notify_fade_ms must not exceed notify_remove_ms".into(),
            ));
        }
        Ok(self)
    }

    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}
