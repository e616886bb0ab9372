use std::rc::Rc;
use std::sync::Once;
use wasm_bindgen::prelude::*;

pub mod channel;
pub mod components;
pub mod config;
pub mod controller;
pub mod dom;
pub mod error;
pub mod model;
pub mod notifications;
pub mod state;
pub mod util;

use channel::{ChannelHandle, MotdPlayer, MotdPlayerChannel};
use components::app::{Screen, ScreenBinding, ScreenRoot, ScreenRootProps};
use config::MotdConfig;
use controller::Controller;
use error::MotdError;

static LOGGER: Once = Once::new();

/// Page entry point: `mount("shop", motdPlayer, { ... })`.
///
/// Binds the screen's host nodes and starts talking to `motd_player`. Fails
/// without touching the channel when the screen is unknown, a node is missing
/// or the config is invalid.
#[wasm_bindgen]
pub fn mount(screen: &str, motd_player: MotdPlayer, config: JsValue) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let config = MotdConfig::from_js(config)?;
    let level = config.log_level();
    LOGGER.call_once(|| wasm_logger::init(wasm_logger::Config::new(level)));

    let screen: Screen = screen.parse()?;
    let document = dom::document()?;
    let binding = ScreenBinding::bind(screen, &document)?;
    log::info!("mounting {screen:?} screen");

    let root = document
        .create_element("div")
        .map_err(|e| MotdError::Dom(dom::js_error_message(&e)))?;
    let body = document
        .body()
        .ok_or_else(|| MotdError::Dom("document has no body".into()))?;
    body.append_child(&root)
        .map_err(|e| MotdError::Dom(dom::js_error_message(&e)))?;

    let props = ScreenRootProps {
        binding,
        controller: Controller::with_alerts(ChannelHandle::new(MotdPlayerChannel::new(
            motd_player,
        ))),
        config: Rc::new(config),
    };
    yew::Renderer::<ScreenRoot>::with_root_and_props(root, props).render();
    Ok(())
}
