//! Request/response channel provided by the host page (`motdPlayer`).

use crate::dom::js_error_message;
use crate::model::{Request, ServerResponse};
use js_sys::Function;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use yew::Callback;

#[wasm_bindgen]
extern "C" {
    /// The host's MOTD player object.
    pub type MotdPlayer;

    #[wasm_bindgen(method)]
    fn retarget(this: &MotdPlayer, page_id: &str, on_ready: &Function, on_error: &Function);

    #[wasm_bindgen(method)]
    fn post(this: &MotdPlayer, payload: &JsValue, on_success: &Function, on_error: &Function);
}

/// Named-channel request/response transport.
///
/// Implementations must invoke exactly one of the two callbacks of each call.
pub trait RequestChannel {
    fn retarget(&self, name: &str, on_ready: Callback<()>, on_error: Callback<String>);
    fn post(
        &self,
        request: &Request,
        on_success: Callback<ServerResponse>,
        on_error: Callback<String>,
    );
}

/// Shared handle usable as a component prop.
#[derive(Clone)]
pub struct ChannelHandle(pub Rc<dyn RequestChannel>);

impl ChannelHandle {
    pub fn new(channel: impl RequestChannel + 'static) -> Self {
        Self(Rc::new(channel))
    }
}

impl PartialEq for ChannelHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl std::ops::Deref for ChannelHandle {
    type Target = dyn RequestChannel;

    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}

pub struct MotdPlayerChannel {
    player: MotdPlayer,
}

impl MotdPlayerChannel {
    pub fn new(player: MotdPlayer) -> Self {
        Self { player }
    }
}

fn error_function(on_error: Callback<String>) -> Function {
    Closure::once_into_js(move |err: JsValue| on_error.emit(js_error_message(&err))).unchecked_into()
}

impl RequestChannel for MotdPlayerChannel {
    fn retarget(&self, name: &str, on_ready: Callback<()>, on_error: Callback<String>) {
        let ready: Function = Closure::once_into_js(move || on_ready.emit(())).unchecked_into();
        self.player.retarget(name, &ready, &error_function(on_error));
    }

    fn post(
        &self,
        request: &Request,
        on_success: Callback<ServerResponse>,
        on_error: Callback<String>,
    ) {
        let payload = match serde_wasm_bindgen::to_value(request) {
            Ok(p) => p,
            Err(e) => {
                on_error.emit(format!("could not encode `{}`: {e}", request.action()));
                return;
            }
        };
        let decode_error = on_error.clone();
        let success: Function = Closure::once_into_js(move |data: JsValue| {
            match serde_wasm_bindgen::from_value::<ServerResponse>(data) {
                Ok(resp) => on_success.emit(resp),
                Err(e) => decode_error.emit(format!("malformed response: {e}")),
            }
        })
        .unchecked_into();
        self.player.post(&payload, &success, &error_function(on_error));
    }
}
