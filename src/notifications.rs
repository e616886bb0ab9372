//! Transient popups appended to `<body>`.
//!
//! Popups are not queued: each one lives on its own timers, so several may
//! overlap on screen in append order.

use crate::config::MotdConfig;
use crate::dom::{self, js_error_message};
use crate::error::MotdError;
use crate::model::ServerResponse;
use crate::util::non_empty;
use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PopupKind {
    Notify,
    Error,
}

impl PopupKind {
    pub fn class(self) -> &'static str {
        match self {
            PopupKind::Notify => "popup-notification",
            PopupKind::Error => "popup-error",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Notifier {
    pub fade_after_ms: u32,
    pub remove_after_ms: u32,
}

impl Default for Notifier {
    fn default() -> Self {
        Self::from_config(&MotdConfig::default())
    }
}

impl Notifier {
    pub fn from_config(config: &MotdConfig) -> Self {
        Self {
            fade_after_ms: config.notify_fade_ms,
            remove_after_ms: config.notify_remove_ms,
        }
    }

    pub fn show(&self, kind: PopupKind, text: &str) -> Result<(), MotdError> {
        let document = dom::document()?;
        let body = document
            .body()
            .ok_or_else(|| MotdError::Dom("document has no body".into()))?;
        let popup: HtmlElement = document
            .create_element("div")
            .map_err(|e| MotdError::Dom(js_error_message(&e)))?
            .dyn_into()
            .map_err(|_| MotdError::Dom("created div is not an HTML element".into()))?;
        popup.set_class_name(kind.class());
        popup.set_text_content(Some(text));
        popup
            .style()
            .set_property("opacity", "1")
            .map_err(|e| MotdError::Dom(js_error_message(&e)))?;
        body.append_child(&popup)
            .map_err(|e| MotdError::Dom(js_error_message(&e)))?;

        let fading = popup.clone();
        Timeout::new(self.fade_after_ms, move || {
            if let Err(err) = fading.style().set_property("opacity", "0") {
                log::warn!("popup did not fade: {}", js_error_message(&err));
            }
        })
        .forget();
        Timeout::new(self.remove_after_ms, move || popup.remove()).forget();
        Ok(())
    }

    /// Shows the popups a response asks for, notify first.
    pub fn surface(&self, response: &ServerResponse) {
        let popups = [
            (PopupKind::Notify, response.popup_notify.as_deref()),
            (PopupKind::Error, response.popup_error.as_deref()),
        ];
        for (kind, text) in popups {
            let Some(text) = non_empty(text) else { continue };
            if let Err(err) = self.show(kind, text) {
                log::error!("popup `{text}` not shown: {err}");
            }
        }
    }
}
