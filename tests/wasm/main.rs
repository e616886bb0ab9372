#![cfg(target_arch = "wasm32")]

mod host;
mod notifications;
mod screens;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);
